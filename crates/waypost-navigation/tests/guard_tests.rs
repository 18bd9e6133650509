//! Guard state machine behaviour of the navigator.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use rstest::{fixture, rstest};
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use waypost_navigation::{
	NavigationError, NavigationOutcome, NavigationPhase, NavigationSettings, Navigator,
	Principal, RedirectReason, SettingsError,
};
use waypost_routes::prelude::*;

/// View registry counting every fetch per module.
#[derive(Default)]
struct CountingViews {
	calls: Mutex<HashMap<String, usize>>,
	failing: Mutex<HashSet<String>>,
}

impl CountingViews {
	fn calls(&self, module: &str) -> usize {
		self.calls.lock().get(module).copied().unwrap_or(0)
	}

	fn total_calls(&self) -> usize {
		self.calls.lock().values().sum()
	}

	fn fail(&self, module: &str) {
		self.failing.lock().insert(module.to_string());
	}

	fn recover(&self, module: &str) {
		self.failing.lock().remove(module);
	}
}

#[async_trait]
impl ViewRegistry for CountingViews {
	async fn load(&self, module: &str) -> Result<Component, LoadError> {
		*self.calls.lock().entry(module.to_string()).or_default() += 1;
		if self.failing.lock().contains(module) {
			return Err(LoadError::new(module, "chunk request failed"));
		}
		Ok(Component::marker(module.to_string()))
	}
}

fn perms(ids: &[&str]) -> PermissionSet {
	ids.iter().copied().collect()
}

struct Fixture {
	views: Arc<CountingViews>,
	principal: Arc<RwLock<Principal>>,
	locale_zh: Arc<AtomicBool>,
	navigator: Navigator,
}

fn build(settings: NavigationSettings) -> Fixture {
	let views = Arc::new(CountingViews::default());
	let registry: Arc<dyn ViewRegistry> = views.clone();
	let lazy = |module: &'static str| ComponentRef::from_registry(registry.clone(), module);
	let eager = |module: &'static str| ComponentRef::eager(Component::marker(module));
	let locale_zh = Arc::new(AtomicBool::new(false));
	let title_locale = locale_zh.clone();

	let tree = RouteTree::build(vec![
		RouteDescriptor::new("")
			.named("home")
			.slot(SlotName::CONTENT, eager("views/Home"))
			.slot(SlotName::LEFT_SIDEBAR, eager("views/Sidebar")),
		RouteDescriptor::new("403")
			.named("error.403")
			.component(eager("views/403")),
		RouteDescriptor::new("404")
			.named("error.404")
			.component(eager("views/404")),
		RouteDescriptor::new("environments")
			.named("environments")
			.slot(SlotName::CONTENT, lazy("views/EnvironmentDashboard"))
			.slot(SlotName::LEFT_SIDEBAR, lazy("views/Sidebar"))
			.meta(
				RouteMeta::new()
					.title(move || {
						if title_locale.load(Ordering::SeqCst) {
							"环境".to_string()
						} else {
							"Environments".to_string()
						}
					})
					.quick_actions(|| vec![QuickAction::new("quickaction.bb.environment.create")])
					.required_permissions(|| perms(&["bb.environments.list"])),
			),
		RouteDescriptor::new("plain")
			.named("plain")
			.slot(SlotName::CONTENT, lazy("views/Plain")),
		RouteDescriptor::new("sql-review")
			.slot(SlotName::LEFT_SIDEBAR, lazy("views/Sidebar"))
			.slot(SlotName::CONTENT, lazy("layouts/SettingLayout"))
			.props(SlotProps::per_slot([(SlotName::CONTENT, true)]))
			.meta(RouteMeta::new().title(|| "SQL Review".to_string()))
			.child(
				RouteDescriptor::new("")
					.named("sql-review")
					.component(lazy("views/SQLReviewDashboard")),
			)
			.child(
				RouteDescriptor::new(":sqlReviewPolicySlug")
					.named("sql-review.detail")
					.component(lazy("views/SQLReviewDetail"))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new()
							.title(|| "Policy".to_string())
							.required_permissions(|| perms(&["bb.policies.get", "bb.policies.update"])),
					),
			),
	])
	.unwrap();

	let principal = Arc::new(RwLock::new(Principal::new(
		"dev@example.com",
		perms(&["bb.environments.list", "bb.policies.get"]),
	)));
	let navigator = Navigator::builder(Arc::new(tree))
		.principal(principal.clone())
		.settings(settings)
		.build()
		.unwrap();

	Fixture {
		views,
		principal,
		locale_zh,
		navigator,
	}
}

#[fixture]
fn nav() -> Fixture {
	build(NavigationSettings::default())
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
#[tokio::test]
async fn test_denied_navigation_loads_nothing(nav: Fixture) {
	// Arrange
	let navigator = &nav.navigator;

	// Act
	let report = navigator
		.navigate_by_name("sql-review.detail", &params(&[("sqlReviewPolicySlug", "prod")]))
		.await
		.unwrap();

	// Assert
	assert_eq!(
		report.phases,
		vec![
			NavigationPhase::Idle,
			NavigationPhase::Resolving,
			NavigationPhase::Denied,
			NavigationPhase::Redirected,
		]
	);
	assert_eq!(report.redirect_reason(), Some(RedirectReason::Forbidden));
	assert_eq!(nav.views.total_calls(), 0);
	let active = navigator.active().unwrap();
	assert_eq!(active.name.as_deref(), Some("error.403"));
	assert_eq!(active.redirected_from.as_deref(), Some("sql-review/prod"));
}

#[rstest]
#[tokio::test]
async fn test_denied_destination_not_preserved_when_disabled() {
	let nav = build(NavigationSettings::default().with_preserve_denied_destination(false));

	let report = nav
		.navigator
		.navigate_by_path("/sql-review/prod")
		.await
		.unwrap();

	match report.outcome {
		NavigationOutcome::Redirected {
			reason,
			requested,
			active,
		} => {
			assert_eq!(reason, RedirectReason::Forbidden);
			assert_eq!(requested, "sql-review/prod");
			assert_eq!(active.redirected_from, None);
		}
		other => panic!("expected redirect, got {:?}", other),
	}
}

#[rstest]
#[tokio::test]
async fn test_granting_permission_allows_navigation(nav: Fixture) {
	// Arrange
	nav
		.principal
		.write()
		.permissions
		.insert(Permission::new("bb.policies.update"));

	// Act
	let report = nav
		.navigator
		.navigate_by_path("sql-review/prod")
		.await
		.unwrap();

	// Assert
	assert_eq!(
		report.phases,
		vec![
			NavigationPhase::Idle,
			NavigationPhase::Resolving,
			NavigationPhase::Allowed,
			NavigationPhase::Loading,
			NavigationPhase::Mounted,
		]
	);
	let active = report.outcome.active().unwrap();
	assert_eq!(active.name.as_deref(), Some("sql-review.detail"));
	assert_eq!(active.params, params(&[("sqlReviewPolicySlug", "prod")]));
	assert_eq!(nav.navigator.phase(), NavigationPhase::Mounted);
}

#[rstest]
#[tokio::test]
async fn test_route_without_meta_uses_defaults(nav: Fixture) {
	let report = nav
		.navigator
		.navigate_by_name("plain", &HashMap::new())
		.await
		.unwrap();

	let active = report.outcome.active().unwrap();
	assert!(report.is_mounted());
	assert_eq!(active.title, None);
	assert!(active.quick_actions.is_empty());
	assert!(active.breadcrumbs.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_repeat_visits_load_each_slot_once(nav: Fixture) {
	// Arrange
	let navigator = &nav.navigator;

	// Act
	navigator.navigate_by_name("environments", &HashMap::new()).await.unwrap();
	navigator.navigate_by_name("home", &HashMap::new()).await.unwrap();
	navigator.navigate_by_name("environments", &HashMap::new()).await.unwrap();

	// Assert
	assert_eq!(nav.views.calls("views/EnvironmentDashboard"), 1);
	assert_eq!(nav.views.calls("views/Sidebar"), 1);
	assert_eq!(
		navigator.active().unwrap().slot_assignment(),
		vec![
			(&SlotName::CONTENT, "views/EnvironmentDashboard"),
			(&SlotName::LEFT_SIDEBAR, "views/Sidebar"),
		]
	);
}

#[rstest]
#[tokio::test]
async fn test_metadata_resolved_on_every_visit(nav: Fixture) {
	// Arrange
	let navigator = &nav.navigator;
	navigator.navigate_by_name("environments", &HashMap::new()).await.unwrap();
	let first = navigator.active().unwrap();

	// Act
	nav.locale_zh.store(true, Ordering::SeqCst);
	navigator.navigate_by_name("environments", &HashMap::new()).await.unwrap();
	let second = navigator.active().unwrap();

	// Assert
	assert_eq!(first.title.as_deref(), Some("Environments"));
	assert_eq!(second.title.as_deref(), Some("环境"));
	assert_eq!(
		second.quick_actions,
		vec![QuickAction::new("quickaction.bb.environment.create")]
	);
}

#[rstest]
#[tokio::test]
async fn test_load_failure_keeps_previous_route(nav: Fixture) {
	// Arrange
	let navigator = &nav.navigator;
	navigator.navigate_by_name("home", &HashMap::new()).await.unwrap();
	nav.views.fail("views/Plain");

	// Act
	let err = navigator
		.navigate_by_name("plain", &HashMap::new())
		.await
		.unwrap_err();

	// Assert
	assert!(err.is_retryable());
	assert!(matches!(
		err,
		NavigationError::LoadFailure { ref slot, .. } if *slot == SlotName::CONTENT
	));
	assert_eq!(navigator.active().unwrap().name.as_deref(), Some("home"));
	assert_eq!(navigator.phase(), NavigationPhase::Idle);

	// A retry after recovery refetches the evicted module.
	nav.views.recover("views/Plain");
	let report = navigator.navigate_by_name("plain", &HashMap::new()).await.unwrap();
	assert!(report.is_mounted());
	assert_eq!(nav.views.calls("views/Plain"), 2);
}

#[rstest]
#[tokio::test]
async fn test_later_slot_failure_mounts_nothing(nav: Fixture) {
	// Arrange
	let navigator = &nav.navigator;
	navigator.navigate_by_name("home", &HashMap::new()).await.unwrap();
	nav.views.fail("views/Sidebar");

	// Act
	let err = navigator
		.navigate_by_name("environments", &HashMap::new())
		.await
		.unwrap_err();

	// Assert
	assert!(matches!(
		err,
		NavigationError::LoadFailure { ref slot, .. } if *slot == SlotName::LEFT_SIDEBAR
	));
	assert_eq!(nav.views.calls("views/EnvironmentDashboard"), 1);
	assert_eq!(nav.views.calls("views/Sidebar"), 1);
	let active = navigator.active().unwrap();
	assert_eq!(active.name.as_deref(), Some("home"));
	assert_eq!(
		active.slot(&SlotName::CONTENT).map(|mounted| mounted.component.module()),
		Some("views/Home")
	);
	assert_eq!(navigator.phase(), NavigationPhase::Idle);
}

#[rstest]
#[case("/does/not/exist")]
#[case("sql-review/a/b")]
#[tokio::test]
async fn test_unknown_path_redirects_to_not_found(nav: Fixture, #[case] path: &str) {
	let report = nav.navigator.navigate_by_path(path).await.unwrap();

	assert_eq!(report.redirect_reason(), Some(RedirectReason::NotFound));
	assert_eq!(
		report.phases,
		vec![
			NavigationPhase::Idle,
			NavigationPhase::Resolving,
			NavigationPhase::Redirected,
		]
	);
	assert_eq!(
		nav.navigator.active().unwrap().name.as_deref(),
		Some("error.404")
	);
}

#[rstest]
#[tokio::test]
async fn test_unknown_name_redirects_to_not_found(nav: Fixture) {
	let report = nav
		.navigator
		.navigate_by_name("workspace.nope", &HashMap::new())
		.await
		.unwrap();

	match report.outcome {
		NavigationOutcome::Redirected {
			reason, requested, ..
		} => {
			assert_eq!(reason, RedirectReason::NotFound);
			assert_eq!(requested, "workspace.nope");
		}
		other => panic!("expected redirect, got {:?}", other),
	}
}

#[rstest]
#[tokio::test]
async fn test_missing_parameter_is_an_error(nav: Fixture) {
	let err = nav
		.navigator
		.navigate_by_name("sql-review.detail", &HashMap::new())
		.await
		.unwrap_err();

	assert!(matches!(
		err,
		NavigationError::MissingParameter { ref route, ref param }
			if route == "sql-review.detail" && param == "sqlReviewPolicySlug"
	));
	assert!(nav.navigator.active().is_none());
}

#[rstest]
#[tokio::test]
async fn test_props_and_breadcrumbs(nav: Fixture) {
	// Arrange
	nav
		.principal
		.write()
		.permissions
		.insert(Permission::new("bb.policies.update"));

	// Act
	let report = nav
		.navigator
		.navigate_by_name("sql-review.detail", &params(&[("sqlReviewPolicySlug", "dev policy")]))
		.await
		.unwrap();

	// Assert
	let active = report.outcome.active().unwrap();
	assert_eq!(active.path, "sql-review/dev%20policy");
	let forwarded = params(&[("sqlReviewPolicySlug", "dev policy")]);
	assert_eq!(active.slot(&SlotName::DEFAULT).unwrap().props, Some(forwarded.clone()));
	assert_eq!(active.slot(&SlotName::CONTENT).unwrap().props, Some(forwarded));
	assert_eq!(active.slot(&SlotName::LEFT_SIDEBAR).unwrap().props, None);
	let crumbs: Vec<(&str, &str)> = active
		.breadcrumbs
		.iter()
		.map(|crumb| (crumb.title.as_str(), crumb.path.as_str()))
		.collect();
	assert_eq!(
		crumbs,
		vec![
			("SQL Review", "sql-review"),
			("Policy", "sql-review/dev%20policy"),
		]
	);
}

#[rstest]
#[case(NavigationSettings::default().with_forbidden_route("missing"), ConfigurationError::UnknownFallbackRoute("missing".to_string()))]
#[case(NavigationSettings::default().with_not_found_route("nowhere"), ConfigurationError::UnknownFallbackRoute("nowhere".to_string()))]
fn test_fallback_routes_validated(
	#[case] settings: NavigationSettings,
	#[case] expected: ConfigurationError,
) {
	let err = Navigator::builder(fallback_tree())
		.settings(settings)
		.build()
		.unwrap_err();

	assert_eq!(err, expected);
}

fn fallback_tree() -> Arc<RouteTree> {
	Arc::new(
		RouteTree::build(vec![
			RouteDescriptor::new("403")
				.named("error.403")
				.component(ComponentRef::eager(Component::marker("403"))),
			RouteDescriptor::new("404")
				.named("error.404")
				.component(ComponentRef::eager(Component::marker("404"))),
		])
		.unwrap(),
	)
}

#[rstest]
fn test_build_from_settings_file() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "preserve_denied_destination = false").unwrap();

	// Act
	let navigator = Navigator::builder(fallback_tree())
		.build_from_file(file.path())
		.unwrap();

	// Assert
	assert!(!navigator.settings().preserve_denied_destination);
	assert_eq!(navigator.settings().forbidden_route, "error.403");
}

#[rstest]
fn test_build_from_settings_file_errors() {
	// Arrange
	let mut unknown_fallback = tempfile::NamedTempFile::new().unwrap();
	writeln!(unknown_fallback, "not_found_route = \"workspace.missing\"").unwrap();

	// Act
	let missing = Navigator::builder(fallback_tree())
		.build_from_file("/nonexistent/waypost.toml")
		.unwrap_err();
	let unresolved = Navigator::builder(fallback_tree())
		.build_from_file(unknown_fallback.path())
		.unwrap_err();

	// Assert
	assert!(matches!(
		missing,
		NavigationError::Settings(SettingsError::FileError(_))
	));
	assert!(!missing.is_retryable());
	assert!(matches!(
		unresolved,
		NavigationError::Configuration(ConfigurationError::UnknownFallbackRoute(ref name))
			if name == "workspace.missing"
	));
}
