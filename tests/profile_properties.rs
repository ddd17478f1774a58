//! Property tests for profile updates and report ranking.

use proptest::prelude::*;

use db_selector::domain::assessment::{
    AnalysisResult, AssessmentProfile, BusinessType, Compatibility, Concurrency, CurrentStack,
    DataVolume, Deployment, FutureFocus, HaRequirement, HardwareArch, ProfileUpdate,
    Recommendation,
};

fn any_update() -> impl Strategy<Value = ProfileUpdate> {
    prop_oneof![
        prop::sample::select(vec![
            BusinessType::Oltp,
            BusinessType::Olap,
            BusinessType::Htap,
            BusinessType::Hybrid,
        ])
        .prop_map(ProfileUpdate::BusinessType),
        prop::sample::select(vec![
            DataVolume::Small,
            DataVolume::Medium,
            DataVolume::Large,
            DataVolume::Massive,
        ])
        .prop_map(ProfileUpdate::DataVolume),
        prop::sample::select(vec![
            Concurrency::Low,
            Concurrency::Medium,
            Concurrency::High,
            Concurrency::Extreme,
        ])
        .prop_map(ProfileUpdate::Concurrency),
        prop::sample::select(vec![
            Compatibility::Mysql,
            Compatibility::Oracle,
            Compatibility::Postgresql,
            Compatibility::None,
        ])
        .prop_map(ProfileUpdate::Compatibility),
        prop::sample::select(vec![
            CurrentStack::OracleLegacy,
            CurrentStack::MysqlSharding,
            CurrentStack::ObUsage,
            CurrentStack::NewProject,
        ])
        .prop_map(ProfileUpdate::CurrentStack),
        prop::sample::select(vec![
            Deployment::OnpremBareMetal,
            Deployment::OnpremK8s,
            Deployment::CloudManaged,
            Deployment::HybridCloud,
        ])
        .prop_map(ProfileUpdate::Deployment),
        prop::sample::select(vec![
            HaRequirement::Basic,
            HaRequirement::HaLocal,
            HaRequirement::Paxos3,
            HaRequirement::GeoRedundancy,
        ])
        .prop_map(ProfileUpdate::HaRequirement),
        prop::sample::select(vec![
            HardwareArch::X86Generic,
            HardwareArch::KunpengArm,
            HardwareArch::HygonX86,
        ])
        .prop_map(ProfileUpdate::HardwareArch),
        prop::sample::select(vec![
            FutureFocus::Stability,
            FutureFocus::Elasticity,
            FutureFocus::Cost,
            FutureFocus::AiOps,
        ])
        .prop_map(ProfileUpdate::FutureFocus),
    ]
}

/// The last written value per facet, or the default if never written.
fn expected_after(updates: &[ProfileUpdate]) -> AssessmentProfile {
    let defaults = AssessmentProfile::default();
    AssessmentProfile {
        business_type: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::BusinessType(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.business_type),
        data_volume: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::DataVolume(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.data_volume),
        concurrency: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::Concurrency(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.concurrency),
        compatibility: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::Compatibility(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.compatibility),
        current_stack: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::CurrentStack(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.current_stack),
        deployment: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::Deployment(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.deployment),
        ha_requirement: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::HaRequirement(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.ha_requirement),
        hardware_arch: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::HardwareArch(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.hardware_arch),
        future_focus: updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ProfileUpdate::FutureFocus(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(defaults.future_focus),
    }
}

fn rec(name: String, score: i32) -> Recommendation {
    Recommendation {
        name,
        score,
        match_reason: String::new(),
        pros: vec![],
        cons: vec![],
        deployment_advice: String::new(),
        xinchuang_fit: String::new(),
    }
}

proptest! {
    #[test]
    fn update_sequences_are_last_write_wins(updates in prop::collection::vec(any_update(), 0..32)) {
        let mut profile = AssessmentProfile::default();
        for update in &updates {
            profile.apply(*update);
        }
        prop_assert_eq!(profile, expected_after(&updates));
    }

    #[test]
    fn ranking_is_non_increasing_for_any_permutation(
        scores in prop::collection::vec(0..=100i32, 1..12)
    ) {
        let recommendations: Vec<Recommendation> = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| rec(format!("candidate-{index}"), score))
            .collect();
        let analysis = AnalysisResult {
            summary: "ranking check".to_string(),
            recommendations,
        };

        let ranked = analysis.ranked();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ranking_is_stable_on_ties(
        scores in prop::collection::vec(0..=5i32, 2..16)
    ) {
        // A narrow score range forces plenty of ties.
        let recommendations: Vec<Recommendation> = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| rec(format!("{index}"), score))
            .collect();
        let analysis = AnalysisResult {
            summary: "stability check".to_string(),
            recommendations,
        };

        let ranked = analysis.ranked();
        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                let left: usize = pair[0].name.parse().unwrap();
                let right: usize = pair[1].name.parse().unwrap();
                prop_assert!(left < right, "tied candidates must keep input order");
            }
        }
    }
}
