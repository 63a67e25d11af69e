use contracts::system::auth::Identity;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppPage;
use crate::system::auth::context::SessionStore;
use crate::system::auth::validation::validate_credentials;

#[component]
pub fn LoginPage(session: SessionStore, nav: AppGlobalContext) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        if let Err(e) = validate_credentials(&email_val, &password.get()) {
            set_error_message.set(Some(e));
            return;
        }
        set_error_message.set(None);

        session.login(Identity::new(1, "ray", email_val.trim()));
        nav.navigate(AppPage::Dashboard);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Panel de administración"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="correo@ejemplo.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Entrar"</button>
                </form>

                <div class="login-info">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(AppPage::Register);
                    }>"Crear cuenta"</a>
                </div>
            </div>
        </div>
    }
}
