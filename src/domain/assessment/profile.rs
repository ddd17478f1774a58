//! Assessment profile - the accumulated questionnaire answers.
//!
//! Nine enumerated facets describe the workload, the existing estate, and
//! the deployment constraints. Every facet always holds exactly one value;
//! the profile starts from a documented default set and is mutated one
//! facet at a time through [`ProfileUpdate`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workload pattern the database must serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    #[default]
    Oltp,
    Olap,
    Htap,
    Hybrid,
}

impl BusinessType {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oltp => "oltp",
            Self::Olap => "olap",
            Self::Htap => "htap",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Expected total data size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    Small,
    #[default]
    Medium,
    Large,
    Massive,
}

impl DataVolume {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Massive => "massive",
        }
    }
}

/// Peak concurrent-access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Concurrency {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl Concurrency {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

/// SQL-dialect compatibility target, the main driver of migration cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    #[default]
    Mysql,
    Oracle,
    Postgresql,
    None,
}

impl Compatibility {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Oracle => "oracle",
            Self::Postgresql => "postgresql",
            Self::None => "none",
        }
    }
}

/// Where the customer's data estate stands today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrentStack {
    OracleLegacy,
    MysqlSharding,
    ObUsage,
    #[default]
    NewProject,
}

impl CurrentStack {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OracleLegacy => "oracle_legacy",
            Self::MysqlSharding => "mysql_sharding",
            Self::ObUsage => "ob_usage",
            Self::NewProject => "new_project",
        }
    }
}

/// Target deployment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    OnpremBareMetal,
    OnpremK8s,
    #[default]
    CloudManaged,
    HybridCloud,
}

impl Deployment {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnpremBareMetal => "onprem_bare_metal",
            Self::OnpremK8s => "onprem_k8s",
            Self::CloudManaged => "cloud_managed",
            Self::HybridCloud => "hybrid_cloud",
        }
    }
}

/// Requested high-availability replication/failover standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HaRequirement {
    Basic,
    HaLocal,
    #[serde(rename = "paxos_3")]
    #[default]
    Paxos3,
    GeoRedundancy,
}

impl HaRequirement {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::HaLocal => "ha_local",
            Self::Paxos3 => "paxos_3",
            Self::GeoRedundancy => "geo_redundancy",
        }
    }
}

/// Hardware platform, including domestic (Xinchuang) chipsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HardwareArch {
    #[default]
    X86Generic,
    KunpengArm,
    HygonX86,
}

impl HardwareArch {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86Generic => "x86_generic",
            Self::KunpengArm => "kunpeng_arm",
            Self::HygonX86 => "hygon_x86",
        }
    }
}

/// Strategic priority for the coming years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FutureFocus {
    #[default]
    Stability,
    Elasticity,
    Cost,
    AiOps,
}

impl FutureFocus {
    /// Wire token embedded verbatim in the analysis prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stability => "stability",
            Self::Elasticity => "elasticity",
            Self::Cost => "cost",
            Self::AiOps => "ai_ops",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_via_as_str!(
    BusinessType,
    DataVolume,
    Concurrency,
    Compatibility,
    CurrentStack,
    Deployment,
    HaRequirement,
    HardwareArch,
    FutureFocus,
);

/// Accumulated questionnaire answers for one assessment session.
///
/// `Default` yields the documented starting point: an OLTP workload of
/// medium size and concurrency, MySQL compatibility, a greenfield project
/// deployed on managed cloud with three-replica Paxos availability on
/// generic x86, prioritizing stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProfile {
    pub business_type: BusinessType,
    pub data_volume: DataVolume,
    pub concurrency: Concurrency,
    pub compatibility: Compatibility,
    pub current_stack: CurrentStack,
    pub deployment: Deployment,
    pub ha_requirement: HaRequirement,
    pub hardware_arch: HardwareArch,
    pub future_focus: FutureFocus,
}

impl AssessmentProfile {
    /// Applies a single-facet overwrite.
    ///
    /// No cross-facet consistency is checked: every enumerated combination
    /// is a legal input for the analysis.
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::BusinessType(v) => self.business_type = v,
            ProfileUpdate::DataVolume(v) => self.data_volume = v,
            ProfileUpdate::Concurrency(v) => self.concurrency = v,
            ProfileUpdate::Compatibility(v) => self.compatibility = v,
            ProfileUpdate::CurrentStack(v) => self.current_stack = v,
            ProfileUpdate::Deployment(v) => self.deployment = v,
            ProfileUpdate::HaRequirement(v) => self.ha_requirement = v,
            ProfileUpdate::HardwareArch(v) => self.hardware_arch = v,
            ProfileUpdate::FutureFocus(v) => self.future_focus = v,
        }
    }
}

/// A single-facet overwrite of the assessment profile.
///
/// The step form reports exactly one (facet, value) pair per user
/// interaction; carrying the pair as one enum variant makes an update that
/// names one facet but supplies a value for another unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileUpdate {
    BusinessType(BusinessType),
    DataVolume(DataVolume),
    Concurrency(Concurrency),
    Compatibility(Compatibility),
    CurrentStack(CurrentStack),
    Deployment(Deployment),
    HaRequirement(HaRequirement),
    HardwareArch(HardwareArch),
    FutureFocus(FutureFocus),
}
