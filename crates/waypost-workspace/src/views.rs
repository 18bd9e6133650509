//! View module identifiers requested from the view registry.

/// Default landing page content.
pub const DASHBOARD_LANDING_PAGE: &str = "views/DashboardLandingPage";
/// Issue list of the current user.
pub const MY_ISSUES: &str = "views/MyIssues";
/// Sidebar shared by every dashboard route.
pub const DASHBOARD_SIDEBAR: &str = "views/DashboardSidebar";
/// Layout hosting the workspace settings pages.
pub const SETTING_LAYOUT: &str = "layouts/SettingLayout";

/// Project list.
pub const PROJECT_DASHBOARD: &str = "views/ProjectDashboard";
/// Instance list.
pub const INSTANCE_DASHBOARD: &str = "views/InstanceDashboard";
/// Environment list.
pub const ENVIRONMENT_DASHBOARD: &str = "views/EnvironmentDashboard";
/// Review center.
pub const REVIEW_CENTER: &str = "views/ReviewCenter";
/// Export center.
pub const EXPORT_CENTER: &str = "views/ExportCenter";
/// Anomaly center.
pub const ANOMALY_CENTER_DASHBOARD: &str = "views/AnomalyCenterDashboard";
/// Principal profile.
pub const PROFILE_DASHBOARD: &str = "views/ProfileDashboard";
/// Forbidden page.
pub const PAGE_403: &str = "views/Page403";
/// Not-found page.
pub const PAGE_404: &str = "views/Page404";

/// SQL review policy list.
pub const SQL_REVIEW: &str = "views/SettingWorkspaceSQLReview";
/// SQL review policy editor for a new policy.
pub const SQL_REVIEW_CREATE: &str = "views/SettingWorkspaceSQLReviewCreate";
/// One SQL review policy.
pub const SQL_REVIEW_DETAIL: &str = "views/SettingWorkspaceSQLReviewDetail";
/// VCS provider list.
pub const VCS: &str = "views/SettingWorkspaceVCS";
/// VCS provider setup.
pub const VCS_CREATE: &str = "views/SettingWorkspaceVCSCreate";
/// One VCS provider.
pub const VCS_DETAIL: &str = "views/SettingWorkspaceVCSDetail";
/// SSO provider list.
pub const SSO: &str = "views/SettingWorkspaceSSO";
/// One SSO provider, also used to create one.
pub const SSO_DETAIL: &str = "views/SettingWorkspaceSSODetail";
/// Custom approval flows.
pub const CUSTOM_APPROVAL: &str = "views/SettingWorkspaceCustomApproval";
/// Schema templates.
pub const SCHEMA_TEMPLATE: &str = "views/SettingWorkspaceSchemaTemplate";
/// Slow query settings.
pub const SLOW_QUERY: &str = "views/SettingWorkspaceSlowQuery";
/// Risk rules.
pub const RISK_CENTER: &str = "views/SettingWorkspaceRiskCenter";
/// Sensitive data columns.
pub const SENSITIVE_DATA: &str = "views/SettingWorkspaceSensitiveData";
/// Audit log.
pub const AUDIT_LOG: &str = "views/SettingWorkspaceAuditLog";
/// Mail delivery settings.
pub const MAIL_DELIVERY: &str = "views/SettingWorkspaceMailDelivery";
/// Member management.
pub const MEMBER: &str = "views/SettingWorkspaceMember";
/// Role management.
pub const ROLE: &str = "views/SettingWorkspaceRole";
