//! Root application component with routing and context providers.
//!
//! The route table mirrors the navigation surface: two public entry routes
//! (child selection and admin login), the child-facing screens behind auth,
//! and the admin screens behind auth + admin. Each guarded page installs the
//! route guard itself; the session is restored from storage exactly once,
//! before any route renders.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_children::AdminChildrenPage, admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage,
    admin_plans::AdminPlansPage, admin_review::AdminReviewPage, admin_wishes::AdminWishesPage,
    checkin::CheckInPage, history::HistoryPage, home::HomePage, honors::HonorsPage, report::ReportPage,
    select_child::SelectChildPage, wishes::WishesPage,
};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    session.update_untracked(SessionStore::restore);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/sprout.css"/>
        <Title text="Sprout"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SelectChildPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=(StaticSegment("checkin"), ParamSegment("plan_id")) view=CheckInPage/>
                <Route path=StaticSegment("honors") view=HonorsPage/>
                <Route path=StaticSegment("wishes") view=WishesPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("report") view=ReportPage/>
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("reviews")) view=AdminReviewPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("children")) view=AdminChildrenPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("plans")) view=AdminPlansPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("wishes")) view=AdminWishesPage/>
            </Routes>
        </Router>
    }
}
