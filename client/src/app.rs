//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::admin::{
    dashboard::AdminDashboardPage,
    layout::AdminLayout,
    resource::{
        AdminAwardsPage, AdminBlogPostsPage, AdminCertificationsPage, AdminProjectsPage, AdminServicesPage,
        AdminStatsPage, AdminTeamPage, AdminTestimonialsPage,
    },
    site_detail::AdminSiteDetailPage,
    sites::AdminSitesPage,
    submissions::AdminSubmissionsPage,
};
use crate::pages::{
    about::AboutPage, blog::BlogPage, blog_post::BlogPostPage, contact::ContactPage, home::HomePage,
    portfolio::PortfolioPage, project_detail::ProjectDetailPage, services::ServicesPage, signin::SignInPage,
};
use crate::state::auth::{AuthState, BrowserSessionStore, restore};
use crate::util::time::now_ms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Public pages share the navbar and footer; the admin subtree has its own chrome.
#[component]
fn SiteLayout() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="site-main">
            <Outlet/>
        </main>
        <Footer/>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts signed out so server and browser render the same markup; the
    // persisted session is restored once the app is running in the browser.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    Effect::new(move || auth.set(restore(&BrowserSessionStore, now_ms())));

    view! {
        <Stylesheet id="leptos" href="/pkg/peakstart.css"/>
        <Title text="PeakStart Construction"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("services") view=AdminServicesPage/>
                    <Route path=StaticSegment("projects") view=AdminProjectsPage/>
                    <Route path=StaticSegment("blogposts") view=AdminBlogPostsPage/>
                    <Route path=StaticSegment("team") view=AdminTeamPage/>
                    <Route path=StaticSegment("testimonials") view=AdminTestimonialsPage/>
                    <Route path=StaticSegment("stats") view=AdminStatsPage/>
                    <Route path=StaticSegment("certifications") view=AdminCertificationsPage/>
                    <Route path=StaticSegment("awards") view=AdminAwardsPage/>
                    <Route path=StaticSegment("contactsubmissions") view=AdminSubmissionsPage/>
                    <Route path=StaticSegment("sites") view=AdminSitesPage/>
                    <Route path=(StaticSegment("sites"), ParamSegment("id")) view=AdminSiteDetailPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=SiteLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=(StaticSegment("portfolio"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPostPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
