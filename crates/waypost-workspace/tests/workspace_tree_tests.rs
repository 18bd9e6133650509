//! The workspace route table assembled and navigated end to end.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use rstest::{fixture, rstest};
use std::collections::HashMap;
use std::sync::Arc;
use waypost_i18n::{MessageCatalog, Translate, Translator};
use waypost_navigation::{NavigationPhase, Navigator, Principal, RedirectReason};
use waypost_routes::{
	Component, LoadError, PermissionSet, QuickAction, RouteTree, SlotName, ViewRegistry,
};
use waypost_workspace::{WorkspaceRoutes, names, views};

const EN: &str = r#"{
	"common": {"projects": "Projects", "instances": "Instances", "environments": "Environments"},
	"review-center": {"self": "review center"},
	"export-center": {"self": "export center"},
	"schema-template": {"self": "schema template"},
	"slow-query": {"self": "slow query"},
	"sql-review": {"title": "SQL Review", "create": {"breadcrumb": "Create SQL Review"}},
	"settings": {"sidebar": {"sso": "SSO", "gitops": "GitOps", "audit-log": "Audit Log"}}
}"#;

const ZH: &str = r#"{
	"common": {"environments": "环境"},
	"sql-review": {"title": "SQL 审核"}
}"#;

#[derive(Default)]
struct RecordingViews {
	requested: Mutex<Vec<String>>,
}

#[async_trait]
impl ViewRegistry for RecordingViews {
	async fn load(&self, module: &str) -> Result<Component, LoadError> {
		self.requested.lock().push(module.to_string());
		Ok(Component::marker(module.to_string()))
	}
}

struct Workspace {
	translator: Arc<Translator>,
	views: Arc<RecordingViews>,
	tree: Arc<RouteTree>,
}

#[fixture]
fn workspace() -> Workspace {
	let translator = Arc::new(
		Translator::new("en")
			.with_catalog(MessageCatalog::from_json_str("en", EN).unwrap())
			.with_catalog(MessageCatalog::from_json_str("zh-CN", ZH).unwrap()),
	);
	let views = Arc::new(RecordingViews::default());
	let boundary: Arc<dyn Translate> = translator.clone();
	let tree = WorkspaceRoutes::new(boundary, views.clone())
		.build_tree()
		.unwrap();

	Workspace {
		translator,
		views,
		tree: Arc::new(tree),
	}
}

fn navigator(workspace: &Workspace, held: &[&str]) -> Navigator {
	let held: PermissionSet = held.iter().copied().collect();
	Navigator::builder(workspace.tree.clone())
		.principal(Arc::new(RwLock::new(Principal::new("dev@example.com", held))))
		.build()
		.unwrap()
}

#[rstest]
fn test_every_route_name_registered(workspace: Workspace) {
	for name in names::ALL {
		let node = workspace.tree.get(name).unwrap_or_else(|| panic!("missing {name}"));
		assert!(node.is_navigable(), "{name} should be navigable");
	}
	let named = workspace.tree.iter().filter(|node| node.name().is_some()).count();
	assert_eq!(named, names::ALL.len());
}

#[rstest]
#[case(names::WORKSPACE_HOME, "")]
#[case(names::MY_ISSUES, "issues")]
#[case(names::USER_PROFILE, "users/:principalEmail")]
#[case(names::SQL_REVIEW, "sql-review")]
#[case(names::SQL_REVIEW_CREATE, "sql-review/new")]
#[case(names::SQL_REVIEW_DETAIL, "sql-review/:sqlReviewPolicySlug")]
#[case(names::GITOPS_DETAIL, "gitops/:vcsResourceId")]
#[case(names::SSO_DETAIL, "sso/:ssoId")]
#[case(names::CUSTOM_APPROVAL, "custom-approval")]
#[case(names::ROLES, "roles")]
fn test_effective_paths(workspace: Workspace, #[case] name: &str, #[case] expected: &str) {
	assert_eq!(workspace.tree.get(name).unwrap().effective_path(), expected);
}

#[rstest]
fn test_every_route_has_dashboard_sidebar(workspace: Workspace) {
	for node in workspace.tree.iter() {
		let sidebar = node.slot(&SlotName::LEFT_SIDEBAR).unwrap();
		assert_eq!(sidebar.component.module(), views::DASHBOARD_SIDEBAR);
	}
}

#[rstest]
#[case(names::WORKSPACE_HOME, &[])]
#[case(names::ENVIRONMENTS, &["bb.environments.list"])]
#[case(names::SQL_REVIEW_CREATE, &["bb.policies.create"])]
#[case(names::GITOPS, &["bb.vcsProviders.list"])]
#[case(names::SSO_CREATE, &["bb.identityProviders.create"])]
#[case(names::RISK_CENTER, &["bb.settings.get", "bb.risks.list"])]
#[case(names::ROLES, &["bb.roles.list"])]
fn test_required_permissions(workspace: Workspace, #[case] name: &str, #[case] expected: &[&str]) {
	let expected: PermissionSet = expected.iter().copied().collect();
	let required = workspace
		.tree
		.get(name)
		.unwrap()
		.meta()
		.resolve_required_permissions();
	assert_eq!(required, expected);
}

#[rstest]
#[case(names::PROJECTS, Some("Projects"))]
#[case(names::REVIEW_CENTER, Some("Review Center"))]
#[case(names::EXPORT_CENTER, Some("Export Center"))]
#[case(names::SCHEMA_TEMPLATE, Some("Schema Template"))]
#[case(names::SLOW_QUERY, Some("Slow Query"))]
#[case(names::SQL_REVIEW_CREATE, Some("Create SQL Review"))]
#[case(names::GITOPS, Some("GitOps"))]
#[case(names::ANOMALY_CENTER, Some("anomaly-center"))]
#[case(names::MY_ISSUES, None)]
fn test_titles(workspace: Workspace, #[case] name: &str, #[case] expected: Option<&str>) {
	let title = workspace.tree.get(name).unwrap().meta().resolve_title();
	assert_eq!(title.as_deref(), expected);
}

#[rstest]
#[tokio::test]
async fn test_landing_page_mounts_eagerly(workspace: Workspace) {
	// Arrange
	let navigator = navigator(&workspace, &[]);

	// Act
	let report = navigator.navigate_by_path("/").await.unwrap();

	// Assert
	let active = report.outcome.active().unwrap();
	assert_eq!(active.name.as_deref(), Some(names::WORKSPACE_HOME));
	assert_eq!(
		*workspace.views.requested.lock(),
		vec![views::DASHBOARD_SIDEBAR.to_string()]
	);
}

#[rstest]
#[tokio::test]
async fn test_my_issues_quick_actions(workspace: Workspace) {
	let navigator = navigator(&workspace, &[]);

	navigator
		.navigate_by_name(names::MY_ISSUES, &HashMap::new())
		.await
		.unwrap();

	let active = navigator.active().unwrap();
	assert_eq!(active.quick_actions.len(), 6);
	assert_eq!(
		active.quick_actions.first(),
		Some(&QuickAction::new("quickaction.bb.database.schema.update"))
	);
}

#[rstest]
#[tokio::test]
async fn test_settings_page_denied_without_permission(workspace: Workspace) {
	// Arrange
	let navigator = navigator(&workspace, &["bb.settings.get"]);

	// Act
	let report = navigator.navigate_by_path("/risk-center").await.unwrap();

	// Assert
	assert_eq!(report.redirect_reason(), Some(RedirectReason::Forbidden));
	assert_eq!(
		report.phases,
		vec![
			NavigationPhase::Idle,
			NavigationPhase::Resolving,
			NavigationPhase::Denied,
			NavigationPhase::Redirected,
		]
	);
	let requested = workspace.views.requested.lock().clone();
	assert!(!requested.iter().any(|module| module == views::RISK_CENTER));
	assert!(requested.iter().any(|module| module == views::PAGE_403));
	assert_eq!(
		navigator.active().unwrap().redirected_from.as_deref(),
		Some("risk-center")
	);
}

#[rstest]
#[tokio::test]
async fn test_sql_review_detail_with_locale_switch(workspace: Workspace) {
	// Arrange
	let navigator = navigator(&workspace, &["bb.policies.get"]);
	let params: HashMap<String, String> =
		[("sqlReviewPolicySlug".to_string(), "prod".to_string())].into();

	// Act
	navigator
		.navigate_by_name(names::SQL_REVIEW_DETAIL, &params)
		.await
		.unwrap();
	let english = navigator.active().unwrap();
	workspace.translator.set_locale("zh-CN");
	navigator
		.navigate_by_name(names::SQL_REVIEW_DETAIL, &params)
		.await
		.unwrap();
	let chinese = navigator.active().unwrap();

	// Assert
	assert_eq!(english.path, "sql-review/prod");
	assert_eq!(english.title.as_deref(), Some("SQL Review"));
	assert_eq!(chinese.title.as_deref(), Some("SQL 审核"));
	assert_eq!(
		chinese
			.breadcrumbs
			.iter()
			.map(|crumb| crumb.path.as_str())
			.collect::<Vec<_>>(),
		vec!["sql-review", "sql-review/prod"]
	);
	let content = english.slot(&SlotName::CONTENT).unwrap();
	assert_eq!(content.component.module(), views::SETTING_LAYOUT);
	assert_eq!(content.props, Some(params));
}

#[rstest]
#[tokio::test]
async fn test_user_profile_receives_email(workspace: Workspace) {
	let navigator = navigator(&workspace, &[]);

	let report = navigator
		.navigate_by_path("/users/dev%40example.com")
		.await
		.unwrap();

	let active = report.outcome.active().unwrap();
	assert_eq!(active.name.as_deref(), Some(names::USER_PROFILE));
	let content = active.slot(&SlotName::CONTENT).unwrap();
	assert_eq!(
		content.props.as_ref().and_then(|props| props.get("principalEmail")),
		Some(&"dev@example.com".to_string())
	);
}

#[rstest]
#[tokio::test]
async fn test_unknown_workspace_path_is_not_found(workspace: Workspace) {
	let navigator = navigator(&workspace, &[]);

	let report = navigator.navigate_by_path("/sql-review/prod/edit").await.unwrap();

	assert_eq!(report.redirect_reason(), Some(RedirectReason::NotFound));
	assert_eq!(
		navigator.active().unwrap().slot(&SlotName::CONTENT).unwrap().component.module(),
		views::PAGE_404
	);
}
