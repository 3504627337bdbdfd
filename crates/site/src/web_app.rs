use form_app_signup::SignupApp;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sign up" />
        <Meta name="description" content="Signup form with client-side validation and a confirmation step." />

        <div class="site-root">
            <SignupApp />
        </div>
    }
}
