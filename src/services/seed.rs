//! Synthetic client generation for seeding non-production environments.
//!
//! Records are drawn from fixed pools with an unseeded RNG in production;
//! document numbers are not deduplicated, so the store decides what happens
//! on collision.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType, TypeConstraintError};
use crate::models::config::SeedConfig;
use crate::repository::ClientWriter;
use crate::services::ServiceResult;
use crate::services::client as client_service;

/// Codes for national ID card (`C`) and passport (`P`).
pub const DOCUMENT_TYPES: &[&str] = &["C", "P"];

pub const DOCUMENT_NUMBER_RANGE: RangeInclusive<i64> = 10_000_000..=99_999_999;

const PHONE_PREFIX_RANGE: RangeInclusive<u32> = 300..=399;
const PHONE_SUFFIX_RANGE: RangeInclusive<u32> = 0..=9_999_999;

const GIVEN_NAMES: &[&str] = &[
    "Sofía", "Valentina", "Isabella", "Camila", "María", "Lucía", "Martina", "Emma", "Daniela",
    "Sara", "Juan", "Sebastián", "Mateo", "Santiago", "Samuel", "Gabriel", "Alejandro", "David",
    "Lucas", "Nicolás", "Laura", "Paula", "Andrea", "Juliana", "Carolina", "Diego", "Carlos",
    "Julián", "Andrés", "Victoria", "Mariana", "Natalia", "Mónica", "Gabriela", "Ana", "Camilo",
    "José", "Fernando", "Ricardo", "Manuela", "Emilia", "Martín", "Simón", "Thiago", "Javier",
    "Felipe", "Renata", "Adrián", "Mario", "Tomás", "Bruno", "Miguel", "Alejandra", "Claudia",
    "Angela", "Patricia", "Luis", "Antonio", "Jorge", "Héctor", "Diana", "Carla", "Lorena",
    "Esteban", "Juan Pablo", "José Miguel",
];

const SURNAMES: &[&str] = &[
    "Gómez", "Rodríguez", "López", "Martínez", "Pérez", "García", "Sánchez", "Ramírez", "Torres",
    "Flores", "Rojas", "Morales", "Cruz", "Vásquez", "Castillo", "Alvarez", "Mendoza",
    "Gutiérrez", "Ortiz", "Silva", "González", "Jiménez", "Hernández", "Chávez", "Romero",
    "Suárez", "Bravo", "Paredes", "Salazar", "Córdoba", "Castro", "Acosta", "Herrera", "Rincón",
    "Agudelo", "Díaz", "Soto", "Cabrera", "Peña", "Navarro", "Ospina", "Mejía", "Arias",
    "Velásquez", "Cano", "Montoya", "Quintero", "Medina", "Reyes", "Restrepo",
];

const CITIES: &[&str] = &[
    "Bogotá",
    "Medellín",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Cúcuta",
    "Bucaramanga",
    "Pereira",
    "Santa Marta",
    "Ibagué",
];

fn pick<'a, G>(rng: &mut G, pool: &[&'a str]) -> &'a str
where
    G: Rng + ?Sized,
{
    pool.choose(rng).copied().unwrap_or_default()
}

/// Draws one client with every field chosen independently.
pub fn random_client<G>(rng: &mut G) -> Result<Client, TypeConstraintError>
where
    G: Rng + ?Sized,
{
    let document_type = DocumentType::new(pick(rng, DOCUMENT_TYPES))?;
    let document_number = DocumentNumber::new(rng.random_range(DOCUMENT_NUMBER_RANGE))?;

    let first_name = pick(rng, GIVEN_NAMES).to_string();
    let middle_name = pick(rng, GIVEN_NAMES).to_string();
    let last_name = pick(rng, SURNAMES).to_string();
    let second_last_name = pick(rng, SURNAMES).to_string();

    let phone = format!(
        "{:03}-{:07}",
        rng.random_range(PHONE_PREFIX_RANGE),
        rng.random_range(PHONE_SUFFIX_RANGE)
    );
    let address = format!(
        "Calle {} # {}-{}",
        rng.random_range(1..=150),
        rng.random_range(1..=100),
        rng.random_range(1..=50)
    );
    let city = pick(rng, CITIES).to_string();

    Ok(Client {
        document_type,
        document_number,
        first_name,
        middle_name,
        last_name,
        second_last_name,
        phone,
        address,
        city,
    })
}

/// Generates `count` random clients and inserts them one by one.
///
/// Stops at the first failed insert and returns that error; clients inserted
/// before the failure stay in the store. Returns the number of inserted
/// clients, zero when `count <= 0`.
pub fn generate_clients<R, G>(repo: &R, rng: &mut G, count: i64) -> ServiceResult<usize>
where
    R: ClientWriter + ?Sized,
    G: Rng + ?Sized,
{
    let mut inserted = 0;
    for _ in 0..count.max(0) {
        let client = random_client(rng)?;
        client_service::create_client(repo, &client)?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Runs [`generate_clients`] with the thread-local RNG when seeding is enabled.
pub fn seed_clients<R>(repo: &R, config: &SeedConfig) -> ServiceResult<usize>
where
    R: ClientWriter + ?Sized,
{
    if !config.enabled {
        log::info!("Client seeding disabled by configuration");
        return Ok(0);
    }

    log::info!("Generating {} synthetic clients", config.count);
    let inserted = generate_clients(repo, &mut rand::rng(), config.count).map_err(|err| {
        log::error!("Client seeding failed: {err}");
        err
    })?;
    log::info!("Generated {inserted} synthetic clients");

    Ok(inserted)
}
