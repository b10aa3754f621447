use super::*;

// =============================================================
// Defaults and configuration
// =============================================================

#[test]
fn auth_screen_default_starts_on_login_as_candidate() {
    let state = AuthScreenState::default();
    assert_eq!(state.default_tab(), AuthTab::Login);
    assert_eq!(state.active_tab, AuthTab::Login);
    assert_eq!(state.role, Role::Candidate);
    assert!(!state.password_visible(AuthTab::Login));
    assert!(!state.password_visible(AuthTab::Register));
    assert_eq!(state.login, LoginForm::default());
    assert_eq!(state.register, RegisterForm::default());
}

#[test]
fn new_seeds_active_tab_from_default() {
    let state = AuthScreenState::new(AuthTab::Register);
    assert_eq!(state.default_tab(), AuthTab::Register);
    assert_eq!(state.active_tab, AuthTab::Register);
}

#[test]
fn auth_tab_parses_recognized_literals() {
    assert_eq!("login".parse::<AuthTab>(), Ok(AuthTab::Login));
    assert_eq!("register".parse::<AuthTab>(), Ok(AuthTab::Register));
}

#[test]
fn auth_tab_rejects_other_values() {
    assert_eq!(
        "signup".parse::<AuthTab>(),
        Err(ParseAuthTabError("signup".to_owned()))
    );
    assert!("Register".parse::<AuthTab>().is_err());
    assert!(" login".parse::<AuthTab>().is_err());
}

#[test]
fn parse_auth_tab_error_names_rejected_value() {
    let err = "bogus".parse::<AuthTab>().unwrap_err();
    assert_eq!(err.to_string(), "unknown auth tab: \"bogus\"");
}

#[test]
fn from_config_missing_value_is_login() {
    assert_eq!(AuthTab::from_config(None), AuthTab::Login);
}

#[test]
fn from_config_unrecognized_value_falls_back_to_login() {
    assert_eq!(AuthTab::from_config(Some("")), AuthTab::Login);
    assert_eq!(AuthTab::from_config(Some("REGISTER")), AuthTab::Login);
    assert_eq!(AuthTab::from_config(Some("dashboard")), AuthTab::Login);
}

#[test]
fn from_config_register_is_register() {
    assert_eq!(AuthTab::from_config(Some("register")), AuthTab::Register);
}

// =============================================================
// Setters
// =============================================================

#[test]
fn set_role_overwrites() {
    let mut state = AuthScreenState::default();
    state.set_role(Role::Employer);
    assert_eq!(state.role, Role::Employer);
    state.set_role(Role::Candidate);
    assert_eq!(state.role, Role::Candidate);
}

#[test]
fn set_active_tab_leaves_default_tab_untouched() {
    let mut state = AuthScreenState::new(AuthTab::Login);
    state.set_active_tab(AuthTab::Register);
    assert_eq!(state.active_tab, AuthTab::Register);
    assert_eq!(state.default_tab(), AuthTab::Login);
}

#[test]
fn password_visibility_is_tracked_per_field() {
    let mut state = AuthScreenState::default();
    state.set_password_visibility(AuthTab::Login, true);
    assert!(state.password_visible(AuthTab::Login));
    assert!(!state.password_visible(AuthTab::Register));

    state.toggle_password_visibility(AuthTab::Register);
    assert!(state.password_visible(AuthTab::Register));
    state.toggle_password_visibility(AuthTab::Login);
    assert!(!state.password_visible(AuthTab::Login));
}

#[test]
fn set_password_visibility_last_write_wins() {
    let mut state = AuthScreenState::default();
    state.set_password_visibility(AuthTab::Login, true);
    state.set_password_visibility(AuthTab::Login, true);
    state.set_password_visibility(AuthTab::Login, false);
    assert!(!state.password_visible(AuthTab::Login));
}

#[test]
fn set_password_targets_one_form() {
    let mut state = AuthScreenState::default();
    state.set_password(AuthTab::Register, "s3cret".to_owned());
    assert_eq!(state.password(AuthTab::Register), "s3cret");
    assert_eq!(state.register.password, "s3cret");
    assert_eq!(state.password(AuthTab::Login), "");
}

#[test]
fn role_labels() {
    assert_eq!(Role::Candidate.label(), "Job Seeker");
    assert_eq!(Role::Employer.label(), "Employer");
    assert_eq!(Role::Candidate.name_label(), "Full name");
    assert_eq!(Role::Employer.name_label(), "Company name");
}

#[test]
fn tab_labels() {
    assert_eq!(AuthTab::Login.label(), "Sign In");
    assert_eq!(AuthTab::Register.label(), "Create Account");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn login_as_candidate_from_login_goes_to_candidate_dashboard() {
    let state = AuthScreenState::new(AuthTab::from_config(Some("login")));
    let session = SessionState::default();
    assert_eq!(state.submit_login(&session), Destination::CandidateDashboard);
}

#[test]
fn login_as_employer_goes_to_employer_dashboard() {
    let mut state = AuthScreenState::new(AuthTab::Login);
    state.set_role(Role::Employer);
    assert_eq!(state.submit_login(&SessionState::default()), Destination::EmployerDashboard);
}

#[test]
fn login_as_candidate_with_register_default_goes_to_profile_setup() {
    let state = AuthScreenState::new(AuthTab::Register);
    assert_eq!(state.submit_login(&SessionState::default()), Destination::ProfileSetup);
}

#[test]
fn login_reads_construction_tab_not_live_tab() {
    let mut state = AuthScreenState::new(AuthTab::Login);
    state.set_active_tab(AuthTab::Register);
    assert_eq!(state.submit_login(&SessionState::default()), Destination::CandidateDashboard);

    let mut state = AuthScreenState::new(AuthTab::Register);
    state.set_active_tab(AuthTab::Login);
    assert_eq!(state.submit_login(&SessionState::default()), Destination::ProfileSetup);
}

#[test]
fn register_as_candidate_goes_to_profile_setup_and_marks_session() {
    let state = AuthScreenState::new(AuthTab::Register);
    let mut session = SessionState::default();
    assert_eq!(state.submit_register(&mut session), Destination::ProfileSetup);
    assert!(session.is_new_account());
}

#[test]
fn register_as_employer_goes_to_employer_dashboard() {
    let mut state = AuthScreenState::new(AuthTab::Register);
    state.set_role(Role::Employer);
    let mut session = SessionState::default();
    assert_eq!(state.submit_register(&mut session), Destination::EmployerDashboard);
    assert!(session.is_new_account());
}

#[test]
fn register_then_login_stays_on_profile_setup() {
    let state = AuthScreenState::new(AuthTab::Login);
    let mut session = SessionState::default();

    assert_eq!(state.submit_register(&mut session), Destination::ProfileSetup);
    assert!(session.is_new_account());
    assert_eq!(state.submit_login(&session), Destination::ProfileSetup);
    assert_eq!(state.submit_login(&session), Destination::ProfileSetup);
    assert!(session.is_new_account());
}

#[test]
fn new_account_flag_survives_remount() {
    let mut session = SessionState::default();
    AuthScreenState::new(AuthTab::Register).submit_register(&mut session);

    let remounted = AuthScreenState::new(AuthTab::Login);
    assert_eq!(remounted.submit_login(&session), Destination::ProfileSetup);
}

#[test]
fn password_visibility_never_changes_destination() {
    for default_tab in AuthTab::ALL {
        for role in Role::ALL {
            let mut state = AuthScreenState::new(default_tab);
            state.set_role(role);
            let session = SessionState::default();
            let before = state.submit_login(&session);
            for _ in 0..3 {
                state.toggle_password_visibility(AuthTab::Login);
                state.toggle_password_visibility(AuthTab::Register);
                assert_eq!(state.submit_login(&session), before);
            }
        }
    }
}

#[test]
fn form_contents_never_change_destination() {
    let mut state = AuthScreenState::default();
    let session = SessionState::default();
    state.login.email = "someone@example.com".to_owned();
    state.login.password = "hunter2".to_owned();
    assert_eq!(state.submit_login(&session), Destination::CandidateDashboard);
}

// =============================================================
// Serialized identifiers
// =============================================================

#[test]
fn role_and_tab_serialize_as_lowercase_literals() {
    assert_eq!(serde_json::to_value(Role::Candidate).unwrap(), serde_json::json!("candidate"));
    assert_eq!(serde_json::to_value(Role::Employer).unwrap(), serde_json::json!("employer"));
    assert_eq!(serde_json::to_value(AuthTab::Login).unwrap(), serde_json::json!("login"));
    assert_eq!(serde_json::to_value(AuthTab::Register).unwrap(), serde_json::json!("register"));
}

#[test]
fn serialized_tab_parses_back_through_from_str() {
    for tab in AuthTab::ALL {
        let raw = serde_json::to_value(tab).unwrap();
        let literal = raw.as_str().unwrap();
        assert_eq!(literal.parse::<AuthTab>(), Ok(tab));
        assert_eq!(serde_json::from_value::<AuthTab>(raw.clone()).unwrap(), tab);
    }
    let role: Role = serde_json::from_str("\"employer\"").unwrap();
    assert_eq!(role, Role::Employer);
}
