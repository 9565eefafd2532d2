use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tempfile::Builder;

use prenatal_nutrition_rs::catalog::{FoodCatalog, FoodLookup, load_catalog};
use prenatal_nutrition_rs::models::{AgeBracket, Nutrient, Trimester};
use prenatal_nutrition_rs::nutrition::{FoodResolver, MATCH_THRESHOLD};
use prenatal_nutrition_rs::session::NutritionSession;
use prenatal_nutrition_rs::NutritionError;

const CATALOG_CSV: &str = "\
KODE,NAMA,AIR,ENERGI,PROTEIN,LEMAK,KARBOHIDRAT,SERAT
AR001,Nasi Putih,70.0,130,2.4,0.2,28.0,0.4
BP002,Tempe Kedelai Murni,55.3,201,20.8,8.8,13.5,1.4
DR003,Bayam Segar,94.5,16,0.9,0.4,2.9,0.7
ER004,Pisang Ambon,72.0,108,1.0,0.8,24.3,1.9
FP005,Telur Ayam,74.3,154,12.4,10.8,0.7,0.0
";

fn sample_catalog() -> FoodCatalog {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(CATALOG_CSV.as_bytes()).unwrap();
    load_catalog(file.path()).unwrap()
}

#[test]
fn test_nasi_putih_scenario() {
    let catalog = sample_catalog();
    let resolver = FoodResolver::new();

    let resolution = resolver.resolve("nasi putih", catalog.all_names()).unwrap();
    assert_eq!(resolution.name, "Nasi Putih");
    assert!(resolution.score >= MATCH_THRESHOLD);

    let mut session = NutritionSession::new();
    session.add_by_name("nasi putih", &catalog, &resolver).unwrap();
    assert_eq!(session.totals().energy, 130.0);
    assert_eq!(session.totals().water, 70.0);
}

#[test]
fn test_full_flow_produces_report() {
    let catalog = sample_catalog();
    let resolver = FoodResolver::new();
    let mut session = NutritionSession::new();

    for text in ["nasi putih", "tempe", "telur ayam", "pisang ambon"] {
        session.add_by_name(text, &catalog, &resolver).unwrap();
    }
    assert_eq!(session.len(), 4);

    let report = session.report(AgeBracket::Adult, Trimester::Second).unwrap();
    assert_eq!(report.food_count, 4);
    assert_eq!(report.age_label, "19 - 29 years");
    assert_eq!(report.trimester_label, "Trimester 2");

    let eaten_energy = 130.0 + 201.0 + 154.0 + 108.0;
    assert!((report.totals.energy - eaten_energy).abs() < 1e-9);
    for nutrient in Nutrient::ALL {
        assert_eq!(
            report.deficit[nutrient],
            report.requirement[nutrient] - report.totals[nutrient]
        );
    }
}

#[test]
fn test_dish_name_resolves_to_closest_catalog_entry() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("food_catalog.csv");
    let catalog = load_catalog(&path).unwrap();
    let resolver = FoodResolver::new();

    // "Ikan Bandeng Goreng" also scores 86; catalog order breaks the tie
    let resolution = resolver.resolve("tempe goreng", catalog.all_names()).unwrap();
    assert_eq!(resolution.name, "Tempe Kedelai Murni");
    assert_eq!(resolution.score, 86);

    let mut session = NutritionSession::new();
    session.add_by_name("tempe goreng", &catalog, &resolver).unwrap();
    assert_eq!(session.foods()[0].record.name(), "Tempe Kedelai Murni");
    assert_eq!(session.totals().protein, 20.8);
}

#[test]
fn test_low_confidence_is_distinct_from_not_found() {
    let catalog = sample_catalog();
    let resolver = FoodResolver::new();
    let mut session = NutritionSession::new();

    let err = session.add_by_name("xkcdq", &catalog, &resolver).unwrap_err();
    assert!(matches!(err, NutritionError::LowConfidenceMatch { .. }));

    let err = catalog.lookup("nasi putih").unwrap_err();
    assert!(matches!(err, NutritionError::FoodNotFound(_)));

    assert!(session.is_empty());
}

#[test]
fn test_remove_then_report() {
    let catalog = sample_catalog();
    let resolver = FoodResolver::new();
    let mut session = NutritionSession::new();

    session.add_by_name("bayam", &catalog, &resolver).unwrap();
    session.add_by_name("telur", &catalog, &resolver).unwrap();
    session.remove(1).unwrap();

    let report = session.report(AgeBracket::Young, Trimester::Third).unwrap();
    assert_eq!(report.food_count, 1);
    assert_eq!(report.totals.energy, 16.0);

    session.remove(0).unwrap();
    assert!(matches!(
        session.report(AgeBracket::Young, Trimester::Third),
        Err(NutritionError::EmptySession)
    ));
}

#[test]
fn test_sessions_sharing_one_catalog_stay_isolated() {
    let catalog = Arc::new(sample_catalog());
    let resolver = Arc::new(FoodResolver::new());

    let handles: Vec<_> = ["nasi putih", "pisang ambon"]
        .into_iter()
        .map(|text| {
            let catalog = Arc::clone(&catalog);
            let resolver = Arc::clone(&resolver);
            std::thread::spawn(move || {
                let mut session = NutritionSession::new();
                session.add_by_name(text, &*catalog, &*resolver).unwrap();
                session.totals().energy
            })
        })
        .collect();

    let energies: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(energies, vec![130.0, 108.0]);
}

#[test]
fn test_bad_catalog_value_fails_load() {
    let csv = "NAMA,AIR,ENERGI,PROTEIN,LEMAK,KARBOHIDRAT,SERAT\n\
        Kerupuk Udang,8.0,tinggi,1.2,20.0,60.0,0.2\n";
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, NutritionError::DataIntegrity { .. }));
}
