// tests/config_tests.rs

use decaycalc::{Argument, CalcError, DataConfig, FunctionRegistry};

#[test]
fn test_standard_config_installs_into_registry() -> Result<(), CalcError> {
    let registry = FunctionRegistry::new();
    DataConfig::standard().install(&registry)?;

    assert_eq!(registry.m("p")?, 938.27);
    assert_eq!(registry.m("Υ")?, 9460.40);
    assert_eq!(registry.masses().len(), 56);
    Ok(())
}

#[test]
fn test_list_entries_resolve_through_registry() -> Result<(), CalcError> {
    let registry = FunctionRegistry::new();
    let config = DataConfig::standard();
    config.install(&registry)?;

    let leptons = config.lists.get("Leptons").expect("Leptons list is bundled");
    let mut values = Vec::new();
    for call in leptons.calls()? {
        let args: Vec<Argument> = call.args().iter().map(|a| Argument::from(a.as_str())).collect();
        values.push(registry.call(call.function(), &args)?);
    }
    assert_eq!(values, vec![0.511, 105.66, 1776.93, 0.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_json_config_replaces_bundled_sections() -> Result<(), CalcError> {
    let json = r#"{
        "masses": {
            "Baryons (Spin 1/2)": { "p": 938.27, "n": 939.57 },
            "Custom": { "X": 1000 }
        },
        "lists": { "Nucleons": ["m(p)", "m(n)"] }
    }"#;
    let config = DataConfig::from_json_str(json)?;

    let group_names: Vec<&str> = config.masses.groups().iter().map(|g| g.name()).collect();
    assert_eq!(group_names, vec!["Baryons (Spin 1/2)", "Custom"]);
    assert_eq!(config.lists.len(), 1);

    let registry = FunctionRegistry::new();
    config.install(&registry)?;
    assert_eq!(registry.m("X")?, 1000.0);
    assert!(matches!(registry.m("e"), Err(CalcError::UnknownParticle { .. })));
    Ok(())
}

#[test]
fn test_missing_sections_fall_back_to_bundled_data() -> Result<(), CalcError> {
    let config = DataConfig::from_json_str(r#"{ "lists": {} }"#)?;
    assert_eq!(config.masses, DataConfig::standard().masses);
    assert!(config.lists.is_empty());
    Ok(())
}

#[test]
fn test_json_round_trip_keeps_order() -> Result<(), CalcError> {
    let config = DataConfig::standard();
    let json = config.to_json_string()?;
    assert!(json.find("Fundamental Particles") < json.find("Vector Mesons (Spin 1)"));
    assert_eq!(DataConfig::from_json_str(&json)?, config);
    Ok(())
}

#[test]
fn test_malformed_config_is_rejected() {
    for json in [
        r#"{ "masses": { "G": { "p": "938" } } }"#,
        r#"{ "masses": { "G": [1, 2] } }"#,
        r#"{ "lists": { "L": "m(p)" } }"#,
        r#"{ "masses": "#,
    ] {
        let err = DataConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, CalcError::Config { .. }), "{json} gave {err}");
    }
}

#[test]
fn test_install_validates_lists_first() -> Result<(), CalcError> {
    let json = r#"{ "lists": { "Widths": ["Γ(p)"] } }"#;
    let config = DataConfig::from_json_str(json)?;
    let registry = FunctionRegistry::new();

    let err = config.install(&registry).unwrap_err();
    assert_eq!(err, CalcError::UnknownFunction { name: "Γ".to_string() });
    // Nothing was injected
    assert!(registry.masses().is_empty());
    Ok(())
}
