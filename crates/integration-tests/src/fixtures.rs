//! Canned catalog records served by the stub upstream.
//!
//! All canonical URLs are rooted at the stub's own base so the application's
//! foreign-URL check and trailing-id parsing see a consistent catalog.

use serde_json::{Value, json};

/// Total people count reported by the listing; two pages at the upstream's
/// fixed page size of ten.
pub const PEOPLE_COUNT: u64 = 12;

pub fn luke(base: &str) -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{base}/planets/1/"),
        "films": [format!("{base}/films/1/")],
        "species": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "url": format!("{base}/people/1/")
    })
}

pub fn c3po(base: &str) -> Value {
    json!({
        "name": "C-3PO",
        "height": "167",
        "mass": "75",
        "hair_color": "n/a",
        "skin_color": "gold",
        "eye_color": "yellow",
        "birth_year": "112BBY",
        "gender": "n/a",
        "homeworld": format!("{base}/planets/1/"),
        "films": [format!("{base}/films/1/")],
        "species": [format!("{base}/species/2/")],
        "created": "2014-12-10T15:10:51.357000Z",
        "url": format!("{base}/people/2/")
    })
}

pub fn r2d2(base: &str) -> Value {
    json!({
        "name": "R2-D2",
        "height": "96",
        "mass": "32",
        "hair_color": "n/a",
        "skin_color": "white, blue",
        "eye_color": "red",
        "birth_year": "33BBY",
        "gender": "n/a",
        "homeworld": format!("{base}/planets/8/"),
        "films": [format!("{base}/films/1/"), format!("{base}/films/2/")],
        "species": [format!("{base}/species/2/")],
        "created": "2014-12-10T15:11:50.376000Z",
        "url": format!("{base}/people/3/")
    })
}

pub fn leia(base: &str) -> Value {
    json!({
        "name": "Leia Organa",
        "height": "150",
        "mass": "49",
        "hair_color": "brown",
        "skin_color": "light",
        "eye_color": "brown",
        "birth_year": "19BBY",
        "gender": "female",
        "homeworld": format!("{base}/planets/2/"),
        "films": [format!("{base}/films/1/")],
        "species": [],
        "created": "2014-12-10T15:20:09.791000Z",
        "url": format!("{base}/people/5/")
    })
}

pub fn vader(base: &str) -> Value {
    json!({
        "name": "Darth Vader",
        "height": "202",
        "mass": "136",
        "hair_color": "none",
        "skin_color": "white",
        "eye_color": "yellow",
        "birth_year": "41.9BBY",
        "gender": "male",
        "homeworld": format!("{base}/planets/1/"),
        "films": [format!("{base}/films/1/")],
        "species": [],
        "created": "2014-12-10T15:18:20.704000Z",
        "url": format!("{base}/people/4/")
    })
}

pub fn chewbacca(base: &str) -> Value {
    json!({
        "name": "Chewbacca",
        "height": "228",
        "mass": "112",
        "hair_color": "brown",
        "skin_color": "unknown",
        "eye_color": "blue",
        "birth_year": "200BBY",
        "gender": "male",
        "homeworld": format!("{base}/planets/3/"),
        "films": [format!("{base}/films/1/"), format!("{base}/films/2/")],
        "species": [format!("{base}/species/3/")],
        "created": "2014-12-10T16:42:45.066000Z",
        "url": format!("{base}/people/13/")
    })
}

/// People visible on page 1 of the listing.
pub fn people_page_one(base: &str) -> Vec<Value> {
    vec![luke(base), c3po(base), r2d2(base), leia(base)]
}

/// People visible on page 2 of the listing.
pub fn people_page_two(base: &str) -> Vec<Value> {
    vec![vader(base), chewbacca(base)]
}

/// Look up one person fixture by id.
pub fn person_by_id(base: &str, id: u64) -> Option<Value> {
    match id {
        1 => Some(luke(base)),
        2 => Some(c3po(base)),
        3 => Some(r2d2(base)),
        4 => Some(vader(base)),
        5 => Some(leia(base)),
        13 => Some(chewbacca(base)),
        _ => None,
    }
}

pub fn planet_by_id(base: &str, id: u64) -> Option<Value> {
    let (name, climate, terrain, population) = match id {
        1 => ("Tatooine", "arid", "desert", "200000"),
        2 => ("Alderaan", "temperate", "grasslands, mountains", "2000000000"),
        3 => ("Kashyyyk", "tropical", "jungle, forests", "45000000"),
        8 => ("Naboo", "temperate", "grassy hills, swamps", "4500000000"),
        _ => return None,
    };
    Some(json!({
        "name": name,
        "rotation_period": "24",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": climate,
        "gravity": "1 standard",
        "terrain": terrain,
        "population": population,
        "url": format!("{base}/planets/{id}/")
    }))
}

pub fn species_by_id(base: &str, id: u64) -> Option<Value> {
    let (name, classification, designation, language) = match id {
        2 => ("Droid", "artificial", "sentient", "n/a"),
        3 => ("Wookiee", "mammal", "sentient", "Shyriiwook"),
        _ => return None,
    };
    Some(json!({
        "name": name,
        "classification": classification,
        "designation": designation,
        "language": language,
        "url": format!("{base}/species/{id}/")
    }))
}

pub fn all_planets(base: &str) -> Vec<Value> {
    [1, 2, 3, 8]
        .iter()
        .filter_map(|&id| planet_by_id(base, id))
        .collect()
}

pub fn all_species(base: &str) -> Vec<Value> {
    [2, 3]
        .iter()
        .filter_map(|&id| species_by_id(base, id))
        .collect()
}

pub fn all_films(base: &str) -> Vec<Value> {
    vec![
        json!({
            "title": "A New Hope",
            "episode_id": 4,
            "director": "George Lucas",
            "release_date": "1977-05-25",
            "url": format!("{base}/films/1/")
        }),
        json!({
            "title": "The Empire Strikes Back",
            "episode_id": 5,
            "director": "Irvin Kershner",
            "release_date": "1980-05-17",
            "url": format!("{base}/films/2/")
        }),
    ]
}
