use iced::widget::{container, svg, Stack};
use iced::{Alignment, Length, Padding};

use crate::{
    component::{form, text},
    theme,
    widget::*,
};

pub const PASSWORD_MIN_LEN: usize = 6;

/// Configuration of a [`LoginForm`]: every text, color and icon is supplied
/// by the embedding application, the component has no built-in copy.
///
/// Icons and logos are opaque svg handles. The Google logo is required,
/// the header icon is not.
#[derive(Debug, Clone)]
pub struct Config {
    pub background: iced::Color,
    pub padding: Padding,
    pub header_icon: Option<svg::Handle>,
    pub header_icon_tint: iced::Color,
    pub title: String,
    pub subtitle: String,
    pub email_label: String,
    pub email_warning: String,
    pub password_label: String,
    pub password_warning: String,
    pub sign_in_label: String,
    pub sign_in_color: iced::Color,
    pub sign_up_prompt: String,
    pub sign_up_label: String,
    pub sign_up_color: iced::Color,
    pub google_label: String,
    pub google_text_color: iced::Color,
    pub google_color: iced::Color,
    pub google_logo: svg::Handle,
    pub password_visible_icon: svg::Handle,
    pub password_hidden_icon: svg::Handle,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailEdited(String),
    PasswordEdited(String),
    TogglePasswordVisibility,
    SignInPressed,
    GoogleSignInPressed,
    SignUpPressed,
}

/// Outbound contract of the component. The host decides what signing in
/// actually means, the form only reports the gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SignIn { email: String, password: String },
    GoogleSignIn,
    SignUp,
}

/// A self-contained sign-in form: email and password fields with inline
/// validation, a primary sign-in button, a sign-up prompt and a Google
/// sign-in button.
///
/// State lives for a single presentation of the form. Nothing is shared or
/// persisted: the host drives [`LoginForm::update`] with view messages and
/// reacts to the returned [`Event`]s.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    email: form::Value<String>,
    password: form::Value<String>,
    show_password: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email.value
    }

    pub fn password(&self) -> &str {
        &self.password.value
    }

    pub fn email_valid(&self) -> bool {
        self.email.valid
    }

    pub fn password_valid(&self) -> bool {
        self.password.valid
    }

    /// Both action buttons are gated on this. Note that the Google button
    /// shares the gate with the primary button, faithfully to the source
    /// design, even though Google sign-in does not use the two fields.
    pub fn is_valid(&self) -> bool {
        self.email.valid && self.password.valid
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::EmailEdited(value) => {
                self.email.valid = email_address::EmailAddress::parse_with_options(
                    &value,
                    email_address::Options::default().with_required_tld(),
                )
                .is_ok();
                self.email.value = value;
                None
            }
            Message::PasswordEdited(value) => {
                self.password.valid = value.chars().count() >= PASSWORD_MIN_LEN;
                self.password.value = value;
                None
            }
            Message::TogglePasswordVisibility => {
                self.show_password = !self.show_password;
                None
            }
            // Presses are re-checked here so a stale message cannot emit an
            // event the disabled button would not have produced.
            Message::SignInPressed => self.is_valid().then(|| Event::SignIn {
                email: self.email.value.clone(),
                password: self.password.value.clone(),
            }),
            Message::GoogleSignInPressed => self.is_valid().then_some(Event::GoogleSignIn),
            Message::SignUpPressed => Some(Event::SignUp),
        }
    }

    pub fn view<'a>(&'a self, config: &'a Config) -> Element<'a, Message> {
        let header_icon = config.header_icon.clone().map(|handle| {
            Svg::new(handle)
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(48.0))
                .style(theme::svg::tint(config.header_icon_tint))
        });

        let email = form::Form::new(&config.email_label, &self.email, Message::EmailEdited)
            .warning(&config.email_warning)
            .size(text::P1_SIZE)
            .padding(10);

        let toggle_icon = if self.show_password {
            config.password_visible_icon.clone()
        } else {
            config.password_hidden_icon.clone()
        };
        let password = Row::new()
            .push(
                form::Form::new(
                    &config.password_label,
                    &self.password,
                    Message::PasswordEdited,
                )
                .warning(&config.password_warning)
                .size(text::P1_SIZE)
                .padding(10)
                .secure(!self.show_password),
            )
            .push(
                Button::new(
                    Svg::new(toggle_icon)
                        .width(Length::Fixed(20.0))
                        .height(Length::Fixed(20.0)),
                )
                .style(theme::button::transparent)
                .on_press(Message::TogglePasswordVisibility),
            )
            .spacing(10)
            .align_y(Alignment::Start);

        let sign_in = Button::new(
            container(text::p1_medium(&config.sign_in_label))
                .center_x(Length::Fill)
                .padding(5),
        )
        .width(Length::Fill)
        .style(theme::button::custom(config.sign_in_color))
        .on_press_maybe(self.is_valid().then_some(Message::SignInPressed));

        let sign_up = Row::new()
            .push(text::p2_regular(&config.sign_up_prompt))
            .push(
                Button::new(text::p2_regular(&config.sign_up_label).color(config.sign_up_color))
                    .style(theme::button::transparent)
                    .padding(0)
                    .on_press(Message::SignUpPressed),
            )
            .spacing(5)
            .align_y(Alignment::Center);

        // The logo sits on top of the button rather than inside its content,
        // like the source layout.
        let google = Stack::new()
            .push(
                Button::new(
                    container(
                        text::p1_medium(&config.google_label).color(config.google_text_color),
                    )
                    .center_x(Length::Fill)
                    .padding(5),
                )
                .width(Length::Fill)
                .style(theme::button::custom(config.google_color))
                .on_press_maybe(self.is_valid().then_some(Message::GoogleSignInPressed)),
            )
            .push(
                container(
                    Svg::new(config.google_logo.clone())
                        .width(Length::Fixed(24.0))
                        .height(Length::Fixed(24.0)),
                )
                .align_y(Alignment::Center)
                .height(Length::Fill)
                .padding(10),
            )
            .width(Length::Fill);

        let card = Container::new(
            Column::new()
                .push_maybe(header_icon)
                .push(text::h4_bold(&config.title))
                .push(text::p2_regular(&config.subtitle).style(theme::text::secondary))
                .push(email)
                .push(password)
                .push(sign_in)
                .push(sign_up)
                .push(google)
                .spacing(15)
                .align_x(Alignment::Center)
                .width(Length::Fill),
        )
        .padding(25)
        .max_width(460)
        .style(theme::card::simple);

        Container::new(card)
            .padding(config.padding)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(theme::container::custom(config.background))
            .into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color;

    fn edited(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.update(Message::EmailEdited(email.to_string()));
        form.update(Message::PasswordEdited(password.to_string()));
        form
    }

    fn config() -> Config {
        let icon = || svg::Handle::from_memory("<svg/>".as_bytes().to_vec());
        Config {
            background: color::LIGHT_BLACK,
            padding: Padding::new(0.0),
            header_icon: Some(icon()),
            header_icon_tint: color::WHITE,
            title: "Welcome back".to_string(),
            subtitle: "Sign in to your account".to_string(),
            email_label: "Email".to_string(),
            email_warning: "Please enter a valid email address".to_string(),
            password_label: "Password".to_string(),
            password_warning: "Password must be at least 6 characters".to_string(),
            sign_in_label: "Sign In".to_string(),
            sign_in_color: color::GREEN,
            sign_up_prompt: "Don't have an account?".to_string(),
            sign_up_label: "Sign up".to_string(),
            sign_up_color: color::BLUE,
            google_label: "Sign in with Google".to_string(),
            google_text_color: color::WHITE,
            google_color: color::GREY_6,
            google_logo: icon(),
            password_visible_icon: icon(),
            password_hidden_icon: icon(),
        }
    }

    #[test]
    fn email_validation() {
        let mut form = LoginForm::new();
        for (input, valid) in [
            ("a@b.com", true),
            ("User.Name@Example.ORG", true),
            ("bad-email", false),
            ("missing@tld", false),
            ("@no-local.part", false),
            ("", false),
        ] {
            form.update(Message::EmailEdited(input.to_string()));
            assert_eq!(form.email_valid(), valid, "email: {input:?}");
            assert_eq!(form.email(), input);
        }
    }

    #[test]
    fn password_validation() {
        let mut form = LoginForm::new();
        for (input, valid) in [
            ("abcdef", true),
            ("123456789", true),
            ("12345", false),
            ("", false),
        ] {
            form.update(Message::PasswordEdited(input.to_string()));
            assert_eq!(form.password_valid(), valid, "password: {input:?}");
            assert_eq!(form.password(), input);
        }
    }

    #[test]
    fn validity_is_derived_from_both_fields() {
        assert!(edited("a@b.com", "abcdef").is_valid());
        assert!(!edited("bad-email", "abcdef").is_valid());
        assert!(!edited("a@b.com", "12345").is_valid());
        assert!(!edited("bad-email", "12345").is_valid());
    }

    #[test]
    fn untouched_form_shows_no_errors() {
        // Validation only runs on edits, so a fresh form has no error state.
        let form = LoginForm::new();
        assert!(form.email_valid());
        assert!(form.password_valid());
        assert!(form.is_valid());
    }

    #[test]
    fn visibility_toggle_does_not_affect_validation() {
        let mut form = edited("a@b.com", "abcdef");
        assert!(form.update(Message::TogglePasswordVisibility).is_none());
        assert!(form.show_password);
        assert_eq!(form.email(), "a@b.com");
        assert_eq!(form.password(), "abcdef");
        assert!(form.is_valid());
        assert!(form.update(Message::TogglePasswordVisibility).is_none());
        assert!(!form.show_password);
    }

    #[test]
    fn sign_in_emits_raw_values_when_valid() {
        let mut form = edited("a@b.com", "abcdef");
        assert_eq!(
            form.update(Message::SignInPressed),
            Some(Event::SignIn {
                email: "a@b.com".to_string(),
                password: "abcdef".to_string(),
            })
        );
    }

    #[test]
    fn sign_in_is_blocked_while_invalid() {
        let mut form = edited("bad-email", "abcdef");
        assert_eq!(form.update(Message::SignInPressed), None);
        let mut form = edited("a@b.com", "12345");
        assert_eq!(form.update(Message::SignInPressed), None);
    }

    #[test]
    fn google_sign_in_shares_the_form_gate() {
        let mut form = edited("a@b.com", "abcdef");
        assert_eq!(
            form.update(Message::GoogleSignInPressed),
            Some(Event::GoogleSignIn)
        );
        let mut form = edited("a@b.com", "12345");
        assert_eq!(form.update(Message::GoogleSignInPressed), None);
        let mut form = edited("bad-email", "abcdef");
        assert_eq!(form.update(Message::GoogleSignInPressed), None);
    }

    #[test]
    fn sign_up_always_fires() {
        let mut form = edited("bad-email", "123");
        assert_eq!(form.update(Message::SignUpPressed), Some(Event::SignUp));
        let mut form = edited("a@b.com", "abcdef");
        assert_eq!(form.update(Message::SignUpPressed), Some(Event::SignUp));
    }

    #[test]
    fn view_builds_for_any_state() {
        let config = config();
        let form = LoginForm::new();
        let _ = form.view(&config);
        let form = edited("bad-email", "123");
        let _ = form.view(&config);
        let mut form = edited("a@b.com", "abcdef");
        form.update(Message::TogglePasswordVisibility);
        let _ = form.view(&config);
    }
}
