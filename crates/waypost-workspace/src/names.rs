//! Route names of the workspace dashboard.

/// Dashboard landing page.
pub const WORKSPACE_HOME: &str = "workspace.home";
/// Issues assigned to or created by the current user.
pub const MY_ISSUES: &str = "workspace.my-issues";
/// Project list.
pub const PROJECTS: &str = "workspace.projects";
/// Instance list.
pub const INSTANCES: &str = "workspace.instances";
/// Environment list.
pub const ENVIRONMENTS: &str = "workspace.environments";
/// Review center.
pub const REVIEW_CENTER: &str = "workspace.review-center";
/// Export center.
pub const EXPORT_CENTER: &str = "workspace.export-center";
/// Anomaly center.
pub const ANOMALY_CENTER: &str = "workspace.anomaly-center";
/// Profile of a principal, keyed by `principalEmail`.
pub const USER_PROFILE: &str = "workspace.user-profile";
/// Forbidden fallback.
pub const FORBIDDEN: &str = "error.403";
/// Not-found fallback.
pub const NOT_FOUND: &str = "error.404";

/// SQL review policy list.
pub const SQL_REVIEW: &str = "workspace.sql-review";
/// New SQL review policy.
pub const SQL_REVIEW_CREATE: &str = "workspace.sql-review.create";
/// Keyed by `sqlReviewPolicySlug`.
pub const SQL_REVIEW_DETAIL: &str = "workspace.sql-review.detail";

/// GitOps (VCS provider) list.
pub const GITOPS: &str = "workspace.gitops";
/// New VCS provider.
pub const GITOPS_CREATE: &str = "workspace.gitops.create";
/// Keyed by `vcsResourceId`.
pub const GITOPS_DETAIL: &str = "workspace.gitops.detail";

/// Single sign-on provider list.
pub const SSO: &str = "workspace.sso";
/// New SSO provider.
pub const SSO_CREATE: &str = "workspace.sso.create";
/// Keyed by `ssoId`.
pub const SSO_DETAIL: &str = "workspace.sso.detail";

/// Custom approval flows.
pub const CUSTOM_APPROVAL: &str = "workspace.custom-approval";
/// Schema templates.
pub const SCHEMA_TEMPLATE: &str = "workspace.schema-template";
/// Slow query settings.
pub const SLOW_QUERY: &str = "workspace.slow-query";
/// Risk rules.
pub const RISK_CENTER: &str = "workspace.risk-center";
/// Sensitive data columns.
pub const SENSITIVE_DATA: &str = "workspace.sensitive-data";
/// Audit log.
pub const AUDIT_LOG: &str = "workspace.audit-log";
/// Mail delivery settings.
pub const MAIL_DELIVERY: &str = "workspace.mail-delivery";
/// Workspace members.
pub const MEMBERS: &str = "workspace.members";
/// Custom roles.
pub const ROLES: &str = "workspace.roles";

/// Every workspace route name, in declaration order.
pub const ALL: &[&str] = &[
	WORKSPACE_HOME,
	MY_ISSUES,
	PROJECTS,
	INSTANCES,
	ENVIRONMENTS,
	REVIEW_CENTER,
	EXPORT_CENTER,
	ANOMALY_CENTER,
	USER_PROFILE,
	FORBIDDEN,
	NOT_FOUND,
	SQL_REVIEW,
	SQL_REVIEW_CREATE,
	SQL_REVIEW_DETAIL,
	GITOPS,
	GITOPS_CREATE,
	GITOPS_DETAIL,
	SSO,
	SSO_CREATE,
	SSO_DETAIL,
	CUSTOM_APPROVAL,
	SCHEMA_TEMPLATE,
	SLOW_QUERY,
	RISK_CENTER,
	SENSITIVE_DATA,
	AUDIT_LOG,
	MAIL_DELIVERY,
	MEMBERS,
	ROLES,
];
