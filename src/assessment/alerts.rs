use crate::assessment::report::RiskTier;
use crate::record::PatientRecord;

/// Evaluates the clinical-alert predicates. Independent of the risk
/// factors and evaluated after tier classification, since the Moderate
/// tier carries two extra alert rules of its own.
pub(crate) fn collect_clinical_alerts(record: &PatientRecord, tier: RiskTier) -> Vec<String> {
    let mut alerts = Vec::new();

    if record.tp53_mut && record.kras_mut {
        alerts.push("Multiple oncogene mutations detected".to_string());
    }
    if record.tp53_vaf > 0.2 {
        alerts.push(format!(
            "High TP53 VAF ({:.2}) suggests clonal expansion",
            record.tp53_vaf
        ));
    }
    if record.cf_dna_total > 50.0 {
        alerts.push(format!(
            "Extremely elevated cfDNA ({:.1} ng/mL)",
            record.cf_dna_total
        ));
    }
    if record.age > 70 && record.smoking_pack_years > 30.0 {
        alerts.push("High-risk age-smoking combination".to_string());
    }

    if tier == RiskTier::Moderate {
        if record.tp53_mut || record.kras_mut {
            alerts.push(
                "Genetic mutations detected - consider genetic counseling".to_string(),
            );
        }
        if record.cf_dna_total > 35.0 {
            alerts.push(
                "Significantly elevated cfDNA - close monitoring advised".to_string(),
            );
        }
    }

    alerts
}
