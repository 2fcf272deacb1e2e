use portfolio_core::{extract, ExtractedProjectData, KeywordExtractor, ProjectCardExtractor, ProjectMeta};

const CANONICAL: [&str; 5] = [
    "Role: Data Engineer | Duration: 2021-2022 | Team of 5",
    "Project Overview: Built a pipeline.",
    "Key Achievements: • Cut latency 50% • Reduced cost",
    "Tech Stack: Go, Kafka",
    "Impact: Saved $2M annually",
];

#[test]
fn extracts_all_fields_from_canonical_blocks() {
    let data = extract(&CANONICAL);

    assert_eq!(
        data.meta,
        ProjectMeta {
            role: Some("Data Engineer".to_string()),
            duration: Some("2021-2022".to_string()),
            extra: Some("Team of 5".to_string()),
        }
    );
    assert_eq!(data.overview, "Built a pipeline.");
    assert_eq!(
        data.achievements,
        vec!["Cut latency 50%".to_string(), "Reduced cost".to_string()]
    );
    assert_eq!(data.tech_stack, "Go, Kafka");
    assert_eq!(data.impact, "Saved $2M annually");
}

#[test]
fn canonical_blocks_leave_nothing_unmatched() {
    let report = KeywordExtractor.extract_report(&CANONICAL);
    assert!(report.is_complete());
}

#[test]
fn unmarked_input_yields_empty_record() {
    let data = extract(&["Just some prose.", "Another paragraph", ""]);
    assert_eq!(data, ExtractedProjectData::default());
    assert!(extract(&[]).is_empty());
}

#[test]
fn extraction_is_idempotent() {
    assert_eq!(extract(&CANONICAL), extract(&CANONICAL));
}

#[test]
fn achievements_take_precedence_over_tech_stack() {
    let data = extract(&["Key Features: • Fast • Safe. Tech Stack: Rust"]);
    assert_eq!(data.tech_stack, "");
    assert_eq!(
        data.achievements,
        vec!["Fast".to_string(), "Safe. Tech Stack: Rust".to_string()]
    );
}

#[test]
fn overview_takes_precedence_over_every_other_family() {
    let data = extract(&["Impact: none. Project Overview: the real overview"]);
    assert_eq!(data.overview, "the real overview");
    assert_eq!(data.impact, "");
}

#[test]
fn later_blocks_overwrite_earlier_ones() {
    let data = extract(&[
        "Key Achievements: • first",
        "Key Innovations: • second • third",
        "Technical Stack: Python",
        "Technical Architecture: Microservices on k8s",
    ]);
    assert_eq!(data.achievements, vec!["second".to_string(), "third".to_string()]);
    assert_eq!(data.tech_stack, "Microservices on k8s");
}

#[test]
fn impact_variants_strip_through_first_impact_marker() {
    assert_eq!(extract(&["Business Impact: $1M saved"]).impact, "$1M saved");
    assert_eq!(
        extract(&["Industry Impact: adopted widely"]).impact,
        "adopted widely"
    );
}

#[test]
fn meta_is_only_read_from_first_block() {
    let data = extract(&["Project Overview: x", "Role: Lead | Duration: 1y"]);
    assert!(data.meta.is_empty());
    assert_eq!(data.overview, "x");
}

#[test]
fn first_block_can_be_meta_and_keyword_block() {
    let data = extract(&["Role: Lead | Duration: 1y | Impact: doubled revenue"]);
    assert_eq!(data.meta.role.as_deref(), Some("Lead"));
    assert_eq!(data.meta.duration.as_deref(), Some("1y"));
    assert_eq!(data.meta.extra.as_deref(), Some("Impact: doubled revenue"));
    assert_eq!(data.impact, "doubled revenue");
}

#[test]
fn markers_are_case_sensitive() {
    let data = extract(&["tech stack: lowercase", "KEY FEATURES: • shout"]);
    assert!(data.is_empty());
}

#[test]
fn arbitrary_input_never_panics() {
    let inputs = [
        "",
        "|||",
        "Role:",
        "Role: | Duration: |",
        "Key Achievements:",
        "• • •",
        "Impact:Impact:Impact:",
        "Project Overview:",
        "\u{0}\u{feff}Tech Stack:\n\n",
    ];
    for input in inputs {
        let _ = extract(&[input, input]);
    }
    assert!(extract(&["Key Achievements:"]).achievements.is_empty());
}

#[test]
fn repeated_markers_keep_text_after_the_last_one() {
    let data = extract(&[
        "Project Overview: draft. Project Overview: final",
        "Key Features: • a Key Achievements: • b",
        "Technical Stack: old Technical Architecture: new",
    ]);
    assert_eq!(data.overview, "final");
    assert_eq!(data.achievements, vec!["b".to_string()]);
    assert_eq!(data.tech_stack, "new");
}

#[test]
fn repeated_impact_markers_keep_text_after_the_first_one() {
    let data = extract(&["Impact: faster reviews. Business Impact: lower cost"]);
    assert_eq!(data.impact, "faster reviews. Business Impact: lower cost");
}
