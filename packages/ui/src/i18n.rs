use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Zh,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "zh" => Some(Lang::Zh),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to Chinese.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::Zh);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = r#"
            (function(){
              try {
                const saved = localStorage.getItem("authform_lang");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              } catch(e) {}
              try { return (navigator.language || "zh"); } catch(e) {}
              return "zh";
            })()
            "#;
            if let Ok(v) = document::eval(js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using local Lang::Zh signal");
    use_signal(|| Lang::Zh)
}

/// Switch language and remember the choice.
///
/// Takes the signal from [`use_lang`] since hooks cannot run inside event handlers.
pub fn set_lang(mut sig: Signal<Lang>, lang: Lang) {
    sig.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("authform_lang","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to Chinese if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Common
        (Lang::Zh, "app.name") => "账户中心".to_string(),
        (Lang::En, "app.name") => "Account Center".to_string(),
        (Lang::Zh, "lang.label") => "语言".to_string(),
        (Lang::Zh, "config.error_prefix") => "配置错误：".to_string(),
        (Lang::En, "config.error_prefix") => "Config error:".to_string(),

        // Form. Placeholders, the mode switch and the signed-in text keep
        // the deployed English wording in both languages.
        (_, "auth.email_ph") => "Your Account".to_string(),
        (_, "auth.password_ph") => "Your Password".to_string(),
        (Lang::Zh, "auth.show_password") => "显示密码".to_string(),
        (Lang::En, "auth.show_password") => "Show password".to_string(),
        (Lang::Zh, "auth.hide_password") => "隐藏密码".to_string(),
        (Lang::En, "auth.hide_password") => "Hide password".to_string(),
        (Lang::Zh, "auth.submit.login") => "登录系统".to_string(),
        (Lang::En, "auth.submit.login") => "Sign in".to_string(),
        (Lang::Zh, "auth.submit.signup") => "注册账号".to_string(),
        (Lang::En, "auth.submit.signup") => "Create account".to_string(),
        (Lang::Zh, "auth.submitting") => "提交中…".to_string(),
        (Lang::En, "auth.submitting") => "Submitting…".to_string(),
        (_, "auth.switch.to_signup") => "Go To SignUp".to_string(),
        (_, "auth.switch.to_login") => "Go To Login".to_string(),
        (_, "auth.signed_in") => "You Success Login!".to_string(),

        // Toasts
        (Lang::Zh, "toast.title") => "提示".to_string(),
        (Lang::En, "toast.title") => "Notice".to_string(),
        (Lang::Zh, "toast.login_succeeded") => "登录成功".to_string(),
        (Lang::En, "toast.login_succeeded") => "Login succeeded".to_string(),
        (Lang::Zh, "toast.registration_succeeded") => "注册成功".to_string(),
        (Lang::En, "toast.registration_succeeded") => "Registration succeeded".to_string(),
        (Lang::Zh, "toast.error_title") => "错误".to_string(),
        (Lang::En, "toast.error_title") => "Error".to_string(),
        (Lang::Zh, "toast.rejected") => "账户服务拒绝了请求".to_string(),
        (Lang::En, "toast.rejected") => "The account service refused the request".to_string(),
        (Lang::Zh, "toast.transport_failed") => "无法连接账户服务".to_string(),
        (Lang::En, "toast.transport_failed") => "Could not reach the account service".to_string(),
        (Lang::Zh, "toast.missing_email") => "请输入账号".to_string(),
        (Lang::En, "toast.missing_email") => "Please enter your email".to_string(),
        (Lang::Zh, "toast.missing_password") => "请输入密码".to_string(),
        (Lang::En, "toast.missing_password") => "Please enter your password".to_string(),
        (Lang::Zh, "toast.dismiss") => "关闭".to_string(),
        (Lang::En, "toast.dismiss") => "Dismiss".to_string(),

        // Fallback: use Chinese string if present, else show key.
        (Lang::En, k) => t(Lang::Zh, k),
        (Lang::Zh, _) => key.to_string(),
    }
}
