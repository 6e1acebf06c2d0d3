//! Mock Swing Feedback
//!
//! Static report shown once the analysis timer completes. Not derived
//! from the uploaded video in any way.

/// Traffic-light rating attached to the report and to each metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Good,
    NeedsImprovement,
    Warning,
}

impl MetricStatus {
    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Good => "Good",
            MetricStatus::NeedsImprovement => "Needs Improvement",
            MetricStatus::Warning => "Warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MetricStatus::Good => "✓",
            MetricStatus::NeedsImprovement => "⚠",
            MetricStatus::Warning => "✗",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            MetricStatus::Good => "status-good",
            MetricStatus::NeedsImprovement => "status-needs-improvement",
            MetricStatus::Warning => "status-warning",
        }
    }
}

/// One scored aspect of the swing
#[derive(Debug, Clone, PartialEq)]
pub struct SwingMetric {
    pub name: &'static str,
    pub score: u8,
    pub status: MetricStatus,
    pub feedback: &'static str,
}

/// The full mock report
#[derive(Debug, Clone, PartialEq)]
pub struct SwingReport {
    pub overall_score: u8,
    pub status: MetricStatus,
    pub metrics: Vec<SwingMetric>,
    pub key_insights: Vec<&'static str>,
}

/// The canned feedback shown for every clip
pub fn swing_report() -> SwingReport {
    SwingReport {
        overall_score: 78,
        status: MetricStatus::Good,
        metrics: vec![
            SwingMetric {
                name: "Shoulder Rotation",
                score: 85,
                status: MetricStatus::Good,
                feedback: "Excellent shoulder turn and proper coil",
            },
            SwingMetric {
                name: "Hip Alignment",
                score: 72,
                status: MetricStatus::NeedsImprovement,
                feedback: "Hip rotation could be more fluid",
            },
            SwingMetric {
                name: "Arm Extension",
                score: 45,
                status: MetricStatus::Warning,
                feedback: "Keep left arm straighter through impact",
            },
            SwingMetric {
                name: "Weight Transfer",
                score: 88,
                status: MetricStatus::Good,
                feedback: "Great weight shift from back to front foot",
            },
            SwingMetric {
                name: "Follow Through",
                score: 79,
                status: MetricStatus::Good,
                feedback: "Good extension, maintain balance",
            },
        ],
        key_insights: vec![
            "Your backswing plane is excellent",
            "Work on maintaining left arm extension",
            "Hip rotation timing needs improvement",
            "Overall tempo is very good",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape_is_fixed() {
        let report = swing_report();
        assert_eq!(report.overall_score, 78);
        assert_eq!(report.status, MetricStatus::Good);
        assert_eq!(report.metrics.len(), 5);
        assert_eq!(report.key_insights.len(), 4);
        assert_eq!(report, swing_report());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MetricStatus::Good.label(), "Good");
        assert_eq!(MetricStatus::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(MetricStatus::Warning.label(), "Warning");
    }
}
