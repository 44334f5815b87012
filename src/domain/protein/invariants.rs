use super::entity::ProteinRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates all ProteinRecord invariants
pub fn validate_protein(record: &ProteinRecord) -> DomainResult<()> {
    validate_id(&record.id)?;
    validate_name(&record.name)?;
    Ok(())
}

/// Identifier is the unique key and cannot be empty
fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Protein id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Protein name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protein::mock_proteins;

    #[test]
    fn test_mock_records_are_valid() {
        for record in mock_proteins() {
            assert!(validate_protein(&record).is_ok());
        }
    }

    #[test]
    fn test_empty_id_fails() {
        let mut record = mock_proteins()[0].clone();
        record.id = "  ".to_string();
        assert!(validate_protein(&record).is_err());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut record = mock_proteins()[0].clone();
        record.name = String::new();
        assert!(validate_protein(&record).is_err());
    }
}
