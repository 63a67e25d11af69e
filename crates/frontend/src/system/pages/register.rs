use contracts::system::auth::Identity;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppPage;
use crate::system::auth::context::SessionStore;
use crate::system::auth::validation::validate_credentials;

/// Registration form; captures an identity including the password.
#[component]
pub fn RegisterPage(session: SessionStore, nav: AppGlobalContext) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        if name.is_empty() {
            set_error_message.set(Some("El usuario es obligatorio".to_string()));
            return;
        }
        let email_val = email.get();
        let password_val = password.get();
        if let Err(e) = validate_credentials(&email_val, &password_val) {
            set_error_message.set(Some(e));
            return;
        }
        set_error_message.set(None);

        session.login(Identity::new(1, name, email_val.trim()).with_password(password_val));
        nav.navigate(AppPage::Dashboard);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Crear cuenta"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="email"
                            placeholder="correo electrónico"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="text"
                            placeholder="usuario"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="password"
                            placeholder="escribe tu contraseña"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">"Registrar"</button>
                </form>

                <div class="login-info">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        nav.navigate(AppPage::Login);
                    }>"Ya tengo cuenta"</a>
                </div>
            </div>
        </div>
    }
}
