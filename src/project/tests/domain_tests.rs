//! Domain-focused tests for project validation.

use crate::project::domain::{
    Project, ProjectColor, ProjectDomainError, ProjectDraft, ProjectName,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("#1A2B3C")]
#[case("#abc")]
#[case("#ABCDEF")]
#[case("#0f0")]
fn color_accepts_three_and_six_digit_hex(#[case] value: &str) {
    let color = ProjectColor::new(value).expect("valid colour");
    assert_eq!(color.as_str(), value);
}

#[rstest]
#[case("123456")]
#[case("#12")]
#[case("#1234")]
#[case("#12345")]
#[case("#GGHHII")]
#[case("#1A2B3C4D")]
#[case("")]
#[case("#")]
fn color_rejects_malformed_values(#[case] value: &str) {
    assert_eq!(
        ProjectColor::new(value),
        Err(ProjectDomainError::InvalidProjectColor(value.to_owned()))
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn name_rejects_blank_values(#[case] value: &str) {
    assert_eq!(
        ProjectName::new(value),
        Err(ProjectDomainError::EmptyProjectName)
    );
}

#[rstest]
fn name_is_trimmed() {
    let name = ProjectName::new("  Platform rewrite  ").expect("valid name");
    assert_eq!(name.as_str(), "Platform rewrite");
}

#[rstest]
fn draft_builds_a_project_with_defaults() {
    let draft = ProjectDraft::new("Website", "#00AACC")
        .expect("valid draft")
        .with_description("Marketing site refresh");

    let project = Project::new(draft, None, &DefaultClock);

    assert_eq!(project.name().as_str(), "Website");
    assert_eq!(project.color().as_str(), "#00AACC");
    assert_eq!(project.description(), Some("Marketing site refresh"));
    assert_eq!(project.owner(), None);
}

#[rstest]
fn draft_propagates_validation_failures() {
    assert_eq!(
        ProjectDraft::new("", "#00AACC"),
        Err(ProjectDomainError::EmptyProjectName)
    );
    assert_eq!(
        ProjectDraft::new("Website", "blue"),
        Err(ProjectDomainError::InvalidProjectColor("blue".to_owned()))
    );
}
