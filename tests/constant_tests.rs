// tests/constant_tests.rs

use decaycalc::{CalcError, ConstantTable};
use std::f64::consts::PI;
use std::sync::Arc;
use std::thread;

const TEST_TOLERANCE: f64 = 1e-12;

#[test]
fn test_primary_constants_match_literals() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    assert_eq!(table.get("e")?, 1.602176634e-19);
    assert_eq!(table.get("c")?, 299792458.0);
    assert_eq!(table.get("h")?, 6.62607015e-34);
    assert_eq!(table.get("G")?, 6.6743e-11);
    assert_eq!(table.get("ℏ_MeV")?, 6.58212e-22);
    assert_eq!(table.get("gg")?, 1.214);
    assert_eq!(table.literal("m_e"), Some("9.1093837015e-31"));
    Ok(())
}

#[test]
fn test_fine_structure_and_mixing_angle() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    assert!((table.get("α")? - 1.0 / 137.035999177).abs() < TEST_TOLERANCE);
    assert!((table.get("θw")? - 28.76 * PI / 180.0).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_weak_coupling_composes_from_ge() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    let gw = table.get("gW")?;
    assert_eq!(gw, table.get("ge")? / table.get("θw")?.sin());
    // Repeated reads return the cached value
    assert_eq!(table.get("gW")?.to_bits(), gw.to_bits());
    Ok(())
}

#[test]
fn test_derived_constant_values() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    let alpha = table.get("α")?;
    assert_eq!(table.get("ge")?, (4.0 * PI * alpha).sqrt());
    assert!((table.get("ge")? - 0.30282212).abs() < 1e-8);

    let theta = table.get("θw")?;
    assert_eq!(table.get("gZ")?, table.get("ge")? / (theta.sin() * theta.cos()));

    let eps0 = table.get("ε0")?;
    assert!((eps0 / 8.8541878128e-12 - 1.0).abs() < 1e-4, "ε0 = {eps0}");
    Ok(())
}

#[test]
fn test_standard_table_layout() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    assert_eq!(table.len(), 15);
    let derived: Vec<&str> = table.names().filter(|n| table.is_derived(n)).collect();
    assert_eq!(derived, vec!["ε0", "ge", "gW", "gZ"]);
    assert!(derived.iter().all(|n| !table.is_cached(n)), "nothing is computed before first read");
    Ok(())
}

#[test]
fn test_unknown_constant() -> Result<(), CalcError> {
    let table = ConstantTable::standard()?;
    assert_eq!(table.get("π"), Err(CalcError::UnknownConstant { name: "π".to_string() }));
    assert!(!table.contains("e2"));
    Ok(())
}

#[test]
fn test_concurrent_first_reads_agree() -> Result<(), CalcError> {
    let table = Arc::new(ConstantTable::standard()?);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.get("gZ"))
        })
        .collect();

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.join().expect("reader thread panicked")?);
    }
    assert!(values.windows(2).all(|w| w[0].to_bits() == w[1].to_bits()));
    assert!(table.is_cached("gZ"));
    Ok(())
}
