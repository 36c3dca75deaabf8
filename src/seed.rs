use chrono::{Duration, Months, Utc};
use sea_orm::DbErr;

use crate::entities::scholarship::{ApplicationStatus, FundingType};
use crate::schema::NewScholarship;
use crate::storage::ScholarshipStore;

/// Populates an empty store with sample applications and leaves a non-empty
/// store untouched. Runs to completion before the server accepts requests.
pub async fn run(store: &ScholarshipStore) -> Result<(), DbErr> {
    let existing = store.list().await?;
    if !existing.is_empty() {
        tracing::debug!(
            "store already holds {} scholarships, skipping seed",
            existing.len()
        );
        return Ok(());
    }

    let samples = sample_scholarships();
    let count = samples.len();
    for sample in samples {
        store.create(sample).await?;
    }
    tracing::info!("seeded {} sample scholarships", count);
    Ok(())
}

/// The fixed sample records, with deadlines relative to the current time.
pub fn sample_scholarships() -> Vec<NewScholarship> {
    let today = Utc::now();
    vec![
        NewScholarship {
            scholarship_name: "Knight-Hennessy Scholarship".to_string(),
            university_name: "Stanford University".to_string(),
            country: "USA".to_string(),
            funding_type: FundingType::Full,
            professor_email: "admissions@stanford.edu".to_string(),
            required_documents: vec![
                "CV".to_string(),
                "Statement of Purpose".to_string(),
                "3 Letters of Recommendation".to_string(),
            ],
            deadline: today + Months::new(1),
            status: ApplicationStatus::Applied,
            apply_link: Some("https://stanford.edu/apply".to_string()),
            notes: Some("High priority application".to_string()),
        },
        NewScholarship {
            scholarship_name: "Gates Cambridge Scholarship".to_string(),
            university_name: "University of Cambridge".to_string(),
            country: "UK".to_string(),
            funding_type: FundingType::Partial,
            professor_email: "contact@cam.ac.uk".to_string(),
            required_documents: vec!["CV".to_string(), "Research Proposal".to_string()],
            deadline: today + Duration::days(45),
            status: ApplicationStatus::Preparing,
            apply_link: Some("https://cam.ac.uk/apply".to_string()),
            notes: Some("Need to finish research proposal".to_string()),
        },
        NewScholarship {
            scholarship_name: "ETH Excellence Scholarship".to_string(),
            university_name: "ETH Zurich".to_string(),
            country: "Switzerland".to_string(),
            funding_type: FundingType::Full,
            professor_email: "info@ethz.ch".to_string(),
            required_documents: vec!["Transcripts".to_string(), "CV".to_string()],
            deadline: today + Duration::days(10),
            status: ApplicationStatus::Submitted,
            apply_link: Some("https://ethz.ch/en.html".to_string()),
            notes: Some("Waiting for interview call".to_string()),
        },
    ]
}
