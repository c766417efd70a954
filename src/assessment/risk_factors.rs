use crate::record::PatientRecord;

/// Evaluates the fixed risk-factor predicates against the record.
///
/// The predicates run in a fixed order so the resulting list is
/// reproducible no matter how the input JSON was keyed: age, smoking,
/// cfDNA, fragmentation, short-fragment ratio, TP53, KRAS, CEA, family
/// history, previous cancer, chronic lung disease.
pub(crate) fn collect_risk_factors(record: &PatientRecord) -> Vec<String> {
    let mut factors = Vec::new();

    if record.age > 55 {
        factors.push(format!("Advanced age ({} years)", record.age));
    }
    if record.smoking_status.is_smoker() {
        factors.push(format!(
            "{} smoker with {:.0} pack-years",
            record.smoking_status, record.smoking_pack_years
        ));
    }
    if record.cf_dna_total > 30.0 {
        factors.push(format!("Elevated cfDNA ({:.1} ng/mL)", record.cf_dna_total));
    }
    if record.fragment_score > 0.3 {
        factors.push("Abnormal DNA fragmentation pattern".to_string());
    }
    if record.short_fragment_ratio > 0.35 {
        factors.push("Elevated short fragment ratio".to_string());
    }
    if record.tp53_mut {
        factors.push(format!(
            "TP53 mutation detected (VAF {:.1}%)",
            record.tp53_vaf * 100.0
        ));
    }
    if record.kras_mut {
        factors.push(format!(
            "KRAS mutation detected (VAF {:.1}%)",
            record.kras_vaf * 100.0
        ));
    }
    if record.cea > 5.0 {
        factors.push(format!("Elevated CEA tumor marker ({:.1} ng/mL)", record.cea));
    }
    if record.family_history.is_positive() {
        factors.push("Positive family history of cancer".to_string());
    }
    if record.previous_cancer.is_positive() {
        factors.push("Previous cancer diagnosis".to_string());
    }
    if record.chronic_lung_disease.is_positive() {
        factors.push("Chronic lung disease present".to_string());
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PatientRecord;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(raw: &str) -> PatientRecord {
        PatientRecord::from_json(raw).unwrap()
    }

    #[rstest]
    fn clean_record_has_no_factors() {
        let record = record(
            r#"{
                "age": 45, "sex": "F", "smokingStatus": "Never",
                "cfDNATotal": 10.0, "fragmentScore": 0.2,
                "shortFragmentRatio": 0.2, "cea": 1.5
            }"#,
        );
        assert_eq!(collect_risk_factors(&record), Vec::<String>::new());
    }

    #[rstest]
    fn loaded_record_reports_factors_in_fixed_order() {
        let record = record(
            r#"{
                "age": 68, "sex": "M", "smokingStatus": "Former",
                "smokingPackYears": 35, "cfDNATotal": 32.5,
                "fragmentScore": 0.72, "shortFragmentRatio": 0.38,
                "tp53Mut": true, "tp53VAF": 0.12,
                "krasMut": true, "krasVAF": 0.08, "cea": 6.8
            }"#,
        );
        let factors = collect_risk_factors(&record);
        assert_eq!(factors.len(), 8);
        assert_eq!(factors[0], "Advanced age (68 years)");
        assert_eq!(factors[1], "Former smoker with 35 pack-years");
        assert_eq!(factors[2], "Elevated cfDNA (32.5 ng/mL)");
        assert_eq!(factors[3], "Abnormal DNA fragmentation pattern");
        assert_eq!(factors[4], "Elevated short fragment ratio");
        assert_eq!(factors[5], "TP53 mutation detected (VAF 12.0%)");
        assert_eq!(factors[6], "KRAS mutation detected (VAF 8.0%)");
        assert_eq!(factors[7], "Elevated CEA tumor marker (6.8 ng/mL)");
    }

    #[rstest]
    fn history_factors_come_last() {
        let record = record(
            r#"{
                "age": 45, "sex": "F", "smokingStatus": "Never",
                "cfDNATotal": 10.0, "fragmentScore": 0.2,
                "shortFragmentRatio": 0.2, "cea": 1.5,
                "familyHistory": "Yes", "previousCancer": "Yes",
                "chronicLungDisease": "Yes"
            }"#,
        );
        let factors = collect_risk_factors(&record);
        assert_eq!(
            factors,
            vec![
                "Positive family history of cancer",
                "Previous cancer diagnosis",
                "Chronic lung disease present",
            ]
        );
    }

    #[rstest]
    #[case::cfdna_at_threshold(r#""cfDNATotal": 30.0"#, 0)]
    #[case::cfdna_above_threshold(r#""cfDNATotal": 30.1"#, 1)]
    fn cfdna_threshold_is_exclusive(#[case] field: &str, #[case] expected: usize) {
        let raw = format!(
            r#"{{
                "age": 45, "sex": "F", "smokingStatus": "Never",
                {field}, "fragmentScore": 0.2,
                "shortFragmentRatio": 0.2, "cea": 1.5
            }}"#
        );
        assert_eq!(collect_risk_factors(&record(&raw)).len(), expected);
    }
}
