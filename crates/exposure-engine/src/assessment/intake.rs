use super::domain::Profile;

const MAX_GPA: f64 = 5.0;

/// Structural problems with a submitted profile, rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} is required")]
    MissingName { field: &'static str },
    #[error("gpa {0} is outside the 0.0-5.0 scale")]
    GpaOutOfRange(f64),
    #[error("responses received ({responses}) exceed coaches contacted ({contacted})")]
    ResponsesExceedContacts { responses: u32, contacted: u32 },
}

/// Boundary validation. The engine itself accepts any well-typed profile.
pub fn validate_intake(profile: &Profile) -> Result<(), IntakeError> {
    if profile.first_name.trim().is_empty() {
        return Err(IntakeError::MissingName { field: "firstName" });
    }
    if profile.last_name.trim().is_empty() {
        return Err(IntakeError::MissingName { field: "lastName" });
    }

    if let Some(gpa) = profile.gpa {
        if !gpa.is_finite() || !(0.0..=MAX_GPA).contains(&gpa) {
            return Err(IntakeError::GpaOutOfRange(gpa));
        }
    }

    let market = &profile.market;
    if market.responses_received > market.coaches_contacted {
        return Err(IntakeError::ResponsesExceedContacts {
            responses: market.responses_received,
            contacted: market.coaches_contacted,
        });
    }

    Ok(())
}
