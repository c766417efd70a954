use crate::assessment::report::RiskTier;

/// Human-readable summary for the report. The Uncertain text quotes the
/// measured ensemble disagreement; the others quote the clamped score
/// and factor count.
pub(crate) fn analysis_for(
    tier: RiskTier,
    risk_score: u8,
    factor_count: usize,
    uncertainty: f64,
) -> String {
    match tier {
        RiskTier::Uncertain => format!(
            "Ensemble members disagree on this record (sigma = {uncertainty:.3}). \
             Conflicting biomarker signals were detected; the point estimate should \
             not be acted on without expert review."
        ),
        RiskTier::High => format!(
            "High-risk profile detected with {factor_count} significant risk factors. \
             Estimated {risk_score}% probability of early-stage malignancy; the \
             combination of biomarker abnormalities and clinical factors warrants \
             immediate medical attention."
        ),
        RiskTier::Moderate => format!(
            "Moderate risk assessment with {factor_count} identified risk factors. \
             Estimated {risk_score}% probability requiring continued surveillance; \
             regular monitoring is essential."
        ),
        RiskTier::Low => format!(
            "Low-risk profile with {factor_count} minor factors identified. Estimated \
             {risk_score}% probability; current biomarker levels are within acceptable \
             ranges."
        ),
    }
}

/// Fixed recommendation template per tier, ordered by descending
/// urgency: diagnostic and imaging steps before lifestyle guidance.
pub(crate) fn recommendations_for(tier: RiskTier) -> Vec<String> {
    let texts: &[&str] = match tier {
        RiskTier::Uncertain => &[
            "Urgent oncologist consultation for expert review",
            "Additional biomarker panel recommended",
            "Repeat analysis with updated clinical data",
            "Multidisciplinary team review suggested",
        ],
        RiskTier::High => &[
            "Schedule high-resolution CT scan within 1-2 weeks",
            "Urgent pulmonology consultation recommended",
            "Consider PET-CT scan for comprehensive staging",
            "Complete metabolic panel and additional tumor markers",
            "Discuss tissue biopsy options with oncology team",
        ],
        RiskTier::Moderate => &[
            "Follow-up screening in 3-6 months",
            "Annual low-dose CT screening recommended",
            "Repeat biomarker testing in 6 months",
            "Smoking cessation counseling if applicable",
            "Monitor for new respiratory symptoms",
        ],
        RiskTier::Low => &[
            "Continue annual health screenings",
            "Maintain healthy lifestyle choices",
            "Avoid tobacco and limit alcohol consumption",
            "Report any new respiratory symptoms promptly",
        ],
    };
    texts.iter().map(|t| t.to_string()).collect()
}
