use gift_engine::config::ScoringConfig;
use gift_engine::gifts::{
    classify, compute_scores, describe, strip_alias, Answer, AssessmentError, GiftAssessmentEngine,
    GiftCatalog, GiftProfile, KeyPolicy, MinistryRoleDirectory, ThresholdFactor,
};

fn abc_catalog() -> GiftCatalog {
    GiftCatalog::new(vec![
        GiftProfile::new("A", "Alpha", "First letter", "• Leads the alphabet"),
        GiftProfile::new("B", "Bravo (Beta)", "Second letter", "• Follows alpha"),
        GiftProfile::new("C", "Charlie", "Third letter", "• Rarely referenced"),
    ])
    .expect("catalog valid")
}

#[test]
fn unreferenced_category_scores_zero_and_is_not_secondary() {
    let catalog = abc_catalog();
    let answers = vec![
        Answer::new(5, [("A", 1.0)]),
        Answer::new(5, [("B", 1.0)]),
    ];

    let scores = compute_scores(&catalog, &answers, KeyPolicy::Lenient).expect("scores compute");
    assert_eq!(scores.get("A"), Some(0.5));
    assert_eq!(scores.get("B"), Some(0.5));
    assert_eq!(scores.get("C"), Some(0.0));

    let classification =
        classify(&catalog, &scores, ThresholdFactor::default()).expect("classification succeeds");
    assert_eq!(classification.primary_gift(), "Alpha");
    assert_eq!(classification.secondary_gifts(), vec!["Bravo".to_string()]);

    let bundle = describe(
        &catalog,
        classification.primary_gift(),
        &classification.secondary_gifts(),
    )
    .expect("descriptions resolve");
    assert_eq!(bundle.primary.gift, "Alpha");
    assert_eq!(bundle.secondary[0].gift, "Bravo (Beta)");
}

#[test]
fn all_zero_correlations_use_equal_shares() {
    let catalog = abc_catalog();
    let answers = vec![Answer::new(3, [("A", 0.0), ("B", 0.0), ("C", 0.0)])];

    let scores = compute_scores(&catalog, &answers, KeyPolicy::Lenient).expect("scores compute");

    for (_, score) in scores.iter() {
        assert_eq!(score, 0.3333);
    }
}

#[test]
fn answers_deserialize_from_wire_and_alias_field_names() {
    let wire: Vec<Answer> = serde_json::from_str(
        r#"[
            {"question_id": 3, "answer": 4, "gift_correlation": {"SERVICE": 0.5}},
            {"rating": 2, "correlation": {"GIVING": 1.0}}
        ]"#,
    )
    .expect("answers parse");

    assert_eq!(wire[0], Answer::new(4, [("SERVICE", 0.5)]).with_question(3));
    assert_eq!(wire[1].rating, 2);
    assert_eq!(wire[1].question_id, None);

    let engine = GiftAssessmentEngine::motivational(ScoringConfig::default());
    let result = engine.assess(&wire).expect("assessment succeeds");
    assert_eq!(result.primary_gift, "Service");
}

#[test]
fn description_lookup_fails_loudly_for_unknown_names() {
    let none: [&str; 0] = [];
    let err = describe(GiftCatalog::motivational(), "Mercy", &none).expect_err("unknown name");
    assert_eq!(err, AssessmentError::UnknownCategory("Mercy".to_string()));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = GiftAssessmentEngine::new(
        GiftCatalog::motivational(),
        MinistryRoleDirectory::standard(),
        ScoringConfig::default(),
    );
    let answers = vec![
        Answer::new(5, [("COMPASSION", 1.0)]),
        Answer::new(4, [("GIVING", 1.0)]),
        Answer::new(1, [("TEACHING", 1.0)]),
    ];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.assess(&answers).expect("assessment succeeds")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread completes"))
            .collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].primary_gift, "Compassion");
    assert_eq!(results[0].secondary_gifts, vec!["Giving".to_string()]);
    assert_eq!(strip_alias(&results[0].descriptions.primary.gift), "Compassion");
}
