// Sequence intake rules: cleaning, residue validation, FASTA parsing.
//
// Validation accepts the 20 standard amino-acid letters plus the stop
// codon `*`. Ambiguity codes (B, Z, J) and the placeholder X are rejected;
// the inference backend was trained on standard residues only.

use crate::domain::{DomainError, DomainResult};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum number of residues a sequence must have to be analyzable
pub const MIN_SEQUENCE_LENGTH: usize = 3;

fn residue_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[ACDEFGHIKLMNPQRSTVWY*]+$").unwrap())
}

/// A parsed FASTA document: one header plus the concatenated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// Normalizes raw user input into a bare residue string.
///
/// Drops FASTA header lines, whitespace and any non-letter characters,
/// and uppercases the remainder. `"MKV123"` cleans to `"MKV"`.
pub fn clean_sequence(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .flat_map(|line| line.chars())
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Checks a cleaned sequence against the residue alphabet and length floor.
pub fn validate_sequence(cleaned: &str) -> DomainResult<()> {
    if cleaned.is_empty() {
        return Err(DomainError::MissingInput(
            "no sequence provided".to_string(),
        ));
    }
    if cleaned.len() < MIN_SEQUENCE_LENGTH {
        return Err(DomainError::InvalidSequence(format!(
            "sequence has {} residues, minimum is {}",
            cleaned.len(),
            MIN_SEQUENCE_LENGTH
        )));
    }
    if !residue_pattern().is_match(cleaned) {
        return Err(DomainError::InvalidSequence(
            "sequence contains non-standard residue codes".to_string(),
        ));
    }
    Ok(())
}

/// Parses FASTA text into header + sequence.
///
/// When several header lines are present the last one wins; sequence
/// lines are concatenated with whitespace removed.
pub fn parse_fasta(text: &str) -> FastaRecord {
    let mut header = String::new();
    let mut sequence = String::new();

    for line in text.trim().lines() {
        if let Some(rest) = line.strip_prefix('>') {
            header = rest.to_string();
        } else {
            sequence.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    FastaRecord { header, sequence }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_digits() {
        assert_eq!(clean_sequence("MKV123"), "MKV");
    }

    #[test]
    fn test_clean_strips_fasta_header_and_whitespace() {
        let raw = ">sp|P01308|INS_HUMAN Insulin\nMALW MRLL\nPLLA\n";
        assert_eq!(clean_sequence(raw), "MALWMRLLPLLA");
    }

    #[test]
    fn test_clean_lowercases_input_is_uppercased() {
        assert_eq!(clean_sequence("mkvt"), "MKVT");
    }

    #[test]
    fn test_minimum_length_is_three() {
        assert!(validate_sequence("MKV").is_ok());
        assert!(matches!(
            validate_sequence("MK"),
            Err(DomainError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_empty_sequence_is_missing_input() {
        assert!(matches!(
            validate_sequence(""),
            Err(DomainError::MissingInput(_))
        ));
    }

    #[test]
    fn test_non_standard_residues_rejected() {
        // X is an ambiguity placeholder, not part of the accepted alphabet
        assert!(validate_sequence("XQZ").is_err());
        assert!(validate_sequence("MKVB").is_err());
    }

    #[test]
    fn test_stop_codon_is_accepted() {
        assert!(validate_sequence("MKV*").is_ok());
    }

    #[test]
    fn test_all_standard_residues_accepted() {
        assert!(validate_sequence("ACDEFGHIKLMNPQRSTVWY").is_ok());
    }

    #[test]
    fn test_parse_fasta_concatenates_lines() {
        let parsed = parse_fasta(">header one\nMALW\nMRLL\n");
        assert_eq!(parsed.header, "header one");
        assert_eq!(parsed.sequence, "MALWMRLL");
    }

    #[test]
    fn test_parse_fasta_last_header_wins() {
        let parsed = parse_fasta(">first\nMALW\n>second\nMRLL\n");
        assert_eq!(parsed.header, "second");
        assert_eq!(parsed.sequence, "MALWMRLL");
    }

    #[test]
    fn test_parse_fasta_without_header() {
        let parsed = parse_fasta("MALW\nMRLL");
        assert_eq!(parsed.header, "");
        assert_eq!(parsed.sequence, "MALWMRLL");
    }
}
