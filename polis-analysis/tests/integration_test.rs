//! End-to-end flow: config → store → window search → assembled report.

use std::io::Write;

use polis_analysis::{assemble_report, evaluate_windows, IndicatorStore, WindowSearchParams};
use polis_core::config::PolisConfig;
use polis_core::types::BillRecord;

fn write_indicator_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "municipio_norm,uf,ano,semestre,taxa_homicidios_100k").unwrap();
    for (city, year, semester, value) in [
        ("CAMPINAS", 2020, 1, 10.0),
        ("CAMPINAS", 2020, 2, 7.0),
        ("SANTOS", 2020, 1, 20.0),
        ("SANTOS", 2020, 2, 15.0),
        ("SOROCABA", 2020, 1, 30.0),
        ("SOROCABA", 2020, 2, 33.0),
    ] {
        writeln!(file, "{city},SP,{year},{semester},{value}").unwrap();
    }
    file
}

fn bills() -> Vec<BillRecord> {
    let mut campinas =
        BillRecord::new(0, "CAMPINAS", "SP", "Cria programa de policiamento comunitário")
            .presented_at("2020-02-15");
    campinas.summary = Some("Ementa original do PL de Campinas".to_string());
    campinas.source_url = Some("https://sapl.campinas.sp.leg.br/pl/123".to_string());

    let santos = BillRecord::new(1, "SANTOS", "SP", "Cria programa de policiamento comunitário")
        .presented_at("2020-04-02");

    let sorocaba = BillRecord::new(2, "SOROCABA", "SP", "Institui merenda escolar integral")
        .presented_at("2020-05-20");

    vec![campinas, santos, sorocaba]
}

#[test]
fn full_pipeline_produces_an_enriched_report() {
    let file = write_indicator_csv();
    let toml = format!(
        r#"
        [search]
        min_group_members = 2
        similarity_threshold = 0.75

        [[indicators]]
        id = "homicide_rate"
        path = "{}"
        city_col = "municipio_norm"
        value_col = "taxa_homicidios_100k"
        alias = "Homicide rate per 100k"
        positive_is_good = false
        min_value = 5.0
        "#,
        file.path().display()
    );
    let config = PolisConfig::from_toml_str(&toml).unwrap();
    let registry = config.registry();
    let spec = registry.get("homicide_rate").unwrap();

    let store = IndicatorStore::default();
    let params = WindowSearchParams {
        window_months: 6,
        extra_windows: vec![12],
        min_group_members: config.search.effective_min_group_members(),
        similarity_threshold: config.search.effective_similarity_threshold(),
    };

    let bills = bills();
    let outcome = evaluate_windows(&store, &bills, Some(spec), true, &params).unwrap();
    let report = assemble_report(&outcome, 6, &bills, Some("homicide_rate"));

    assert_eq!(report.indicator.as_deref(), Some("homicide_rate"));
    assert!(report.used_indicator);
    assert_eq!(report.window_months, 6);
    // Three bills resolved effects; only the policing pair forms a cluster.
    assert_eq!(report.total_candidates, 3);
    assert_eq!(report.policies.len(), 1);

    let policy = &report.policies[0];
    assert_eq!(policy.policy, "Cria programa de policiamento comunitário");
    assert!(policy.quality_score.is_some());
    // Falling homicide rate: favorable sign-adjusted mean.
    assert!(policy.effect_mean.unwrap() > 0.0);

    // Metadata resolved from the source bills, first match wins.
    let campinas = policy
        .actions
        .iter()
        .find(|a| a.municipality == "CAMPINAS")
        .unwrap();
    assert_eq!(campinas.presented_at.as_deref(), Some("2020-02-15"));
    assert_eq!(
        campinas.summary.as_deref(),
        Some("Ementa original do PL de Campinas")
    );
    assert_eq!(
        campinas.source_url.as_deref(),
        Some("https://sapl.campinas.sp.leg.br/pl/123")
    );
    // The raw effect keeps its sign in the report: 10.0 → 7.0 is -30%.
    assert!((campinas.effect.unwrap() - -30.0).abs() < 1e-12);

    // Both rankings cover the evaluated window set.
    let mut ranked = report.best_quality_windows.clone();
    ranked.sort_unstable();
    assert_eq!(ranked, vec![6, 12]);
}

#[test]
fn unknown_indicator_id_is_a_validation_failure() {
    let config = PolisConfig::from_toml_str(
        r#"
        [[indicators]]
        id = "homicide_rate"
        path = "data/homicides.csv"
        "#,
    )
    .unwrap();
    let registry = config.registry();
    let err = registry.get("literacy_rate").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("literacy_rate"));
    assert!(message.contains("homicide_rate"));
}

#[test]
fn report_without_indicator_has_no_statistics() {
    let store = IndicatorStore::default();
    let params = WindowSearchParams {
        window_months: 6,
        extra_windows: Vec::new(),
        min_group_members: 2,
        similarity_threshold: 0.75,
    };
    let bills = bills();
    let outcome = evaluate_windows(&store, &bills, None, false, &params).unwrap();
    let report = assemble_report(&outcome, 6, &bills, None);

    assert!(report.indicator.is_none());
    assert!(!report.used_indicator);
    assert_eq!(report.total_candidates, 3);
    assert_eq!(report.policies.len(), 1);
    assert!(report.policies[0].effect_mean.is_none());
    assert!(report.policies[0].quality_score.is_none());
}
