//! The workspace dashboard route table.

use crate::{names, views};
use std::sync::Arc;
use waypost_i18n::{Translate, start_case};
use waypost_routes::{
	Component, ComponentRef, ConfigResult, PermissionSet, QuickAction, RouteDescriptor, RouteMeta,
	RouteTree, SlotName, SlotProps, ViewRegistry,
};

/// Builds the workspace dashboard descriptors.
///
/// Titles go through `translator` each time they are resolved. Deferred
/// views are fetched from `views`; the landing page and the issue list are
/// eager because nearly every session visits them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use waypost_i18n::{Translate, Translator};
/// use waypost_routes::{Component, LoadError, ViewRegistry};
/// use waypost_workspace::{WorkspaceRoutes, names};
///
/// struct Views;
///
/// #[async_trait::async_trait]
/// impl ViewRegistry for Views {
///     async fn load(&self, module: &str) -> Result<Component, LoadError> {
///         Ok(Component::marker(module.to_string()))
///     }
/// }
///
/// let translator: Arc<dyn Translate> = Arc::new(Translator::new("en"));
/// let tree = WorkspaceRoutes::new(translator, Arc::new(Views)).build_tree().unwrap();
///
/// assert_eq!(tree.get(names::SQL_REVIEW_DETAIL).unwrap().effective_path(), "sql-review/:sqlReviewPolicySlug");
/// ```
pub struct WorkspaceRoutes {
	translator: Arc<dyn Translate>,
	views: Arc<dyn ViewRegistry>,
	landing_page: Component,
	my_issues: Component,
}

impl WorkspaceRoutes {
	/// Creates the table with placeholder eager components.
	pub fn new(translator: Arc<dyn Translate>, registry: Arc<dyn ViewRegistry>) -> Self {
		Self {
			translator,
			views: registry,
			landing_page: Component::marker(views::DASHBOARD_LANDING_PAGE),
			my_issues: Component::marker(views::MY_ISSUES),
		}
	}

	/// Sets the preloaded landing page component.
	pub fn with_landing_page(mut self, component: Component) -> Self {
		self.landing_page = component;
		self
	}

	/// Sets the preloaded issue list component.
	pub fn with_my_issues(mut self, component: Component) -> Self {
		self.my_issues = component;
		self
	}

	/// Assembles the route tree.
	pub fn build_tree(&self) -> ConfigResult<RouteTree> {
		RouteTree::build(self.descriptors())
	}

	/// Returns the top-level descriptors in declaration order.
	pub fn descriptors(&self) -> Vec<RouteDescriptor> {
		let mut routes = vec![
			self.dashboard("", names::WORKSPACE_HOME, ComponentRef::eager(self.landing_page.clone())),
			self.dashboard("issues", names::MY_ISSUES, ComponentRef::eager(self.my_issues.clone()))
				.meta(RouteMeta::new().quick_actions(actions(&[
					"quickaction.bb.database.schema.update",
					"quickaction.bb.database.data.update",
					"quickaction.bb.database.create",
					"quickaction.bb.instance.create",
					"quickaction.bb.issue.grant.request.querier",
					"quickaction.bb.issue.grant.request.exporter",
				]))),
			self.dashboard("projects", names::PROJECTS, self.view(views::PROJECT_DASHBOARD))
				.meta(
					RouteMeta::new()
						.title(self.title("common.projects"))
						.quick_actions(actions(&["quickaction.bb.project.create"])),
				),
			self.dashboard("instances", names::INSTANCES, self.view(views::INSTANCE_DASHBOARD))
				.meta(
					RouteMeta::new()
						.title(self.title("common.instances"))
						.quick_actions(actions(&["quickaction.bb.instance.create"])),
				),
			self.dashboard(
				"environments",
				names::ENVIRONMENTS,
				self.view(views::ENVIRONMENT_DASHBOARD),
			)
			.meta(
				RouteMeta::new()
					.title(self.title("common.environments"))
					.quick_actions(actions(&[
						"quickaction.bb.environment.create",
						"quickaction.bb.environment.reorder",
					]))
					.required_permissions(requires(&["bb.environments.list"])),
			),
			self.dashboard("review-center", names::REVIEW_CENTER, self.view(views::REVIEW_CENTER))
				.meta(RouteMeta::new().title(self.start_cased_title("review-center.self"))),
			self.dashboard("export-center", names::EXPORT_CENTER, self.view(views::EXPORT_CENTER))
				.meta(RouteMeta::new().title(self.start_cased_title("export-center.self"))),
			self.dashboard(
				"anomaly-center",
				names::ANOMALY_CENTER,
				self.view(views::ANOMALY_CENTER_DASHBOARD),
			)
			.meta(RouteMeta::new().title(self.title("anomaly-center"))),
			self.dashboard(
				"users/:principalEmail",
				names::USER_PROFILE,
				self.view(views::PROFILE_DASHBOARD),
			)
			.props(SlotProps::All),
			self.dashboard("403", names::FORBIDDEN, self.view(views::PAGE_403)),
			self.dashboard("404", names::NOT_FOUND, self.view(views::PAGE_404)),
		];
		routes.push(self.sql_review());
		routes.push(self.gitops());
		routes.push(self.sso());
		routes.push(self.settings());

		tracing::debug!(top_level = routes.len(), "workspace routes declared");
		routes
	}

	fn sql_review(&self) -> RouteDescriptor {
		self.setting_group("sql-review")
			.meta(
				RouteMeta::new()
					.title(self.title("sql-review.title"))
					.required_permissions(requires(&["bb.policies.get"])),
			)
			.child(
				RouteDescriptor::new("")
					.named(names::SQL_REVIEW)
					.component(self.view(views::SQL_REVIEW))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new()
							.title(self.title("sql-review.title"))
							.required_permissions(requires(&["bb.policies.get"])),
					),
			)
			.child(
				RouteDescriptor::new("new")
					.named(names::SQL_REVIEW_CREATE)
					.component(self.view(views::SQL_REVIEW_CREATE))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new()
							.title(self.title("sql-review.create.breadcrumb"))
							.required_permissions(requires(&["bb.policies.create"])),
					),
			)
			.child(
				RouteDescriptor::new(":sqlReviewPolicySlug")
					.named(names::SQL_REVIEW_DETAIL)
					.component(self.view(views::SQL_REVIEW_DETAIL))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new()
							.title(self.title("sql-review.title"))
							.required_permissions(requires(&["bb.policies.get"])),
					),
			)
	}

	fn gitops(&self) -> RouteDescriptor {
		self.setting_group("gitops")
			.meta(RouteMeta::new().title(self.title("settings.sidebar.gitops")))
			.child(
				RouteDescriptor::new("")
					.named(names::GITOPS)
					.component(self.view(views::VCS))
					.props(SlotProps::All)
					.meta(RouteMeta::new().required_permissions(requires(&["bb.vcsProviders.list"]))),
			)
			.child(
				RouteDescriptor::new("new")
					.named(names::GITOPS_CREATE)
					.component(self.view(views::VCS_CREATE))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new()
							.title(self.title("repository.add-git-provider"))
							.required_permissions(requires(&["bb.vcsProviders.create"])),
					),
			)
			.child(
				RouteDescriptor::new(":vcsResourceId")
					.named(names::GITOPS_DETAIL)
					.component(self.view(views::VCS_DETAIL))
					.props(SlotProps::All)
					.meta(RouteMeta::new().required_permissions(requires(&["bb.vcsProviders.get"]))),
			)
	}

	fn sso(&self) -> RouteDescriptor {
		self.setting_group("sso")
			.meta(RouteMeta::new().title(self.title("settings.sidebar.sso")))
			.child(
				RouteDescriptor::new("")
					.named(names::SSO)
					.component(self.view(views::SSO))
					.meta(RouteMeta::new().required_permissions(requires(&["bb.settings.get"]))),
			)
			.child(
				RouteDescriptor::new("new")
					.named(names::SSO_CREATE)
					.component(self.view(views::SSO_DETAIL))
					.meta(
						RouteMeta::new()
							.required_permissions(requires(&["bb.identityProviders.create"])),
					),
			)
			.child(
				RouteDescriptor::new(":ssoId")
					.named(names::SSO_DETAIL)
					.component(self.view(views::SSO_DETAIL))
					.props(SlotProps::All)
					.meta(
						RouteMeta::new().required_permissions(requires(&["bb.identityProviders.get"])),
					),
			)
	}

	/// Nameless layout host for the workspace settings pages.
	fn settings(&self) -> RouteDescriptor {
		let page = |path: &str, name: &str, view: &'static str, title: RouteMeta| {
			RouteDescriptor::new(path)
				.named(name)
				.component(self.view(view))
				.props(SlotProps::All)
				.meta(title)
		};

		RouteDescriptor::new("")
			.slot(SlotName::CONTENT, self.view(views::SETTING_LAYOUT))
			.slot(SlotName::LEFT_SIDEBAR, self.view(views::DASHBOARD_SIDEBAR))
			.props(SlotProps::All)
			.child(page(
				"custom-approval",
				names::CUSTOM_APPROVAL,
				views::CUSTOM_APPROVAL,
				RouteMeta::new()
					.title(self.title("custom-approval.self"))
					.required_permissions(requires(&["bb.settings.get"])),
			))
			.child(page(
				"schema-template",
				names::SCHEMA_TEMPLATE,
				views::SCHEMA_TEMPLATE,
				RouteMeta::new()
					.title(self.start_cased_title("schema-template.self"))
					.required_permissions(requires(&["bb.policies.get"])),
			))
			.child(page(
				"slow-query",
				names::SLOW_QUERY,
				views::SLOW_QUERY,
				RouteMeta::new()
					.title(self.start_cased_title("slow-query.self"))
					.required_permissions(requires(&["bb.settings.get"])),
			))
			.child(page(
				"risk-center",
				names::RISK_CENTER,
				views::RISK_CENTER,
				RouteMeta::new()
					.title(self.title("custom-approval.risk.risk-center"))
					.required_permissions(requires(&["bb.settings.get", "bb.risks.list"])),
			))
			.child(page(
				"sensitive-data",
				names::SENSITIVE_DATA,
				views::SENSITIVE_DATA,
				RouteMeta::new()
					.title(self.title("settings.sidebar.sensitive-data"))
					.required_permissions(requires(&["bb.policies.get"])),
			))
			.child(page(
				"audit-log",
				names::AUDIT_LOG,
				views::AUDIT_LOG,
				RouteMeta::new()
					.title(self.title("settings.sidebar.audit-log"))
					.required_permissions(requires(&["bb.settings.get"])),
			))
			.child(
				page(
					"mail-delivery",
					names::MAIL_DELIVERY,
					views::MAIL_DELIVERY,
					RouteMeta::new()
						.title(self.title("settings.sidebar.mail-delivery"))
						.required_permissions(requires(&["bb.settings.get"])),
				)
				.props(SlotProps::None),
			)
			.child(page(
				"members",
				names::MEMBERS,
				views::MEMBER,
				RouteMeta::new()
					.title(self.title("settings.sidebar.members-and-groups"))
					.required_permissions(requires(&["bb.policies.get"])),
			))
			.child(page(
				"roles",
				names::ROLES,
				views::ROLE,
				RouteMeta::new()
					.title(self.title("settings.sidebar.custom-roles"))
					.required_permissions(requires(&["bb.roles.list"])),
			))
	}

	/// A top-level page: its own content next to the dashboard sidebar.
	fn dashboard(&self, path: &str, name: &str, content: ComponentRef) -> RouteDescriptor {
		RouteDescriptor::new(path)
			.named(name)
			.slot(SlotName::CONTENT, content)
			.slot(SlotName::LEFT_SIDEBAR, self.view(views::DASHBOARD_SIDEBAR))
			.props(both_slots())
	}

	/// A settings group hosting its pages inside the setting layout.
	fn setting_group(&self, path: &str) -> RouteDescriptor {
		RouteDescriptor::new(path)
			.slot(SlotName::CONTENT, self.view(views::SETTING_LAYOUT))
			.slot(SlotName::LEFT_SIDEBAR, self.view(views::DASHBOARD_SIDEBAR))
			.props(both_slots())
	}

	fn view(&self, module: &'static str) -> ComponentRef {
		ComponentRef::from_registry(Arc::clone(&self.views), module)
	}

	fn title(&self, key: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
		let translator = Arc::clone(&self.translator);
		move || translator.translate(key)
	}

	fn start_cased_title(&self, key: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
		let translator = Arc::clone(&self.translator);
		move || start_case(&translator.translate(key))
	}
}

/// Convenience for [`WorkspaceRoutes::descriptors`].
pub fn workspace_routes(
	translator: Arc<dyn Translate>,
	registry: Arc<dyn ViewRegistry>,
) -> Vec<RouteDescriptor> {
	WorkspaceRoutes::new(translator, registry).descriptors()
}

fn both_slots() -> SlotProps {
	SlotProps::per_slot([(SlotName::CONTENT, true), (SlotName::LEFT_SIDEBAR, true)])
}

fn actions(ids: &'static [&'static str]) -> impl Fn() -> Vec<QuickAction> + Send + Sync + 'static {
	move || ids.iter().map(|id| QuickAction::new(*id)).collect()
}

fn requires(ids: &'static [&'static str]) -> impl Fn() -> PermissionSet + Send + Sync + 'static {
	move || ids.iter().copied().collect()
}
