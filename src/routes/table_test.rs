use super::*;

fn standard() -> RouteTable {
    RouteTable::standard(&RouterConfig::default()).unwrap()
}

fn login() -> Route {
    Route::new("/login", "Login", Screen::Login)
}

// =============================================================
// Standard table
// =============================================================

#[test]
fn standard_table_declares_five_routes_and_root_redirect() {
    let table = standard();
    let paths: Vec<&str> = table.routes().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        ["/login", "/register", "/menu", "/ai-chat", "/image-recognition"]
    );
    assert_eq!(table.redirects(), [Redirect::new("/", "/login")]);
}

#[test]
fn standard_table_gates_only_working_screens() {
    let table = standard();
    let gated: Vec<&str> = table
        .routes()
        .iter()
        .filter(|r| r.requires_auth)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(gated, ["Menu", "AIChat", "ImageRecognition"]);
}

#[test]
fn standard_table_names_and_paths_are_unique() {
    let table = standard();
    let names: HashSet<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
    let paths: HashSet<&str> = table.routes().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(names.len(), table.routes().len());
    assert_eq!(paths.len(), table.routes().len());
}

#[test]
fn standard_table_login_route_is_public() {
    let table = standard();
    assert_eq!(table.login().path, "/login");
    assert!(!table.login().requires_auth);
}

#[test]
fn standard_table_honours_configured_login_path() {
    let config = RouterConfig::from_json(r#"{ "login_path": "/register" }"#).unwrap();
    let table = RouteTable::standard(&config).unwrap();
    assert_eq!(table.login().name, "Register");
    assert_eq!(table.redirects(), [Redirect::new("/", "/register")]);
}

#[test]
fn standard_table_rejects_gated_login_path() {
    let config = RouterConfig::from_json(r#"{ "login_path": "/menu" }"#).unwrap();
    let err = RouteTable::standard(&config).unwrap_err();
    assert_eq!(err, RouteTableError::LoginRequiresAuth("/menu".to_owned()));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_root_redirects_to_login() {
    let table = standard();
    match table.resolve("/") {
        Resolution::Redirect { from, to } => {
            assert_eq!(from, "/");
            assert_eq!(to.path, "/login");
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[test]
fn resolve_exact_path_returns_route() {
    let table = standard();
    match table.resolve("/ai-chat") {
        Resolution::Route(route) => {
            assert_eq!(route.name, "AIChat");
            assert_eq!(route.screen, Screen::AiChat);
        }
        other => panic!("expected route, got {other:?}"),
    }
}

#[test]
fn resolve_is_exact_match_only() {
    let table = standard();
    assert_eq!(table.resolve("/menu/"), Resolution::NotFound);
    assert_eq!(table.resolve("/Menu"), Resolution::NotFound);
    assert_eq!(table.resolve("/men"), Resolution::NotFound);
    assert_eq!(table.resolve(""), Resolution::NotFound);
}

#[test]
fn by_name_finds_route() {
    let table = standard();
    assert_eq!(table.by_name("ImageRecognition").map(|r| r.path.as_str()), Some("/image-recognition"));
    assert!(table.by_name("Missing").is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn new_rejects_relative_route_path() {
    let err = RouteTable::new(vec![login(), Route::new("menu", "Menu", Screen::Menu)], vec![], "/login")
        .unwrap_err();
    assert_eq!(err, RouteTableError::InvalidPath("menu".to_owned()));
}

#[test]
fn new_rejects_duplicate_name() {
    let err = RouteTable::new(
        vec![login(), Route::new("/sign-in", "Login", Screen::Login)],
        vec![],
        "/login",
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicateName("Login".to_owned()));
}

#[test]
fn new_rejects_duplicate_path() {
    let err = RouteTable::new(
        vec![login(), Route::new("/login", "SignIn", Screen::Login)],
        vec![],
        "/login",
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicatePath("/login".to_owned()));
}

#[test]
fn new_rejects_redirect_shadowing_route() {
    let err = RouteTable::new(
        vec![login(), Route::new("/menu", "Menu", Screen::Menu)],
        vec![Redirect::new("/menu", "/login")],
        "/login",
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::RedirectShadowsRoute("/menu".to_owned()));
}

#[test]
fn new_rejects_duplicate_redirect_source() {
    let err = RouteTable::new(
        vec![login()],
        vec![Redirect::new("/", "/login"), Redirect::new("/", "/login")],
        "/login",
    )
    .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicateRedirect("/".to_owned()));
}

#[test]
fn new_rejects_redirect_to_undeclared_route() {
    let err = RouteTable::new(vec![login()], vec![Redirect::new("/", "/home")], "/login").unwrap_err();
    assert_eq!(
        err,
        RouteTableError::UnknownRedirectTarget {
            from: "/".to_owned(),
            to: "/home".to_owned(),
        }
    );
}

#[test]
fn new_rejects_missing_login_route() {
    let err = RouteTable::new(vec![Route::new("/register", "Register", Screen::Register)], vec![], "/login")
        .unwrap_err();
    assert_eq!(err, RouteTableError::MissingLoginRoute("/login".to_owned()));
}

#[test]
fn new_rejects_gated_login_route() {
    let err = RouteTable::new(vec![login().requiring_auth()], vec![], "/login").unwrap_err();
    assert_eq!(err, RouteTableError::LoginRequiresAuth("/login".to_owned()));
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn route_serializes_with_kebab_case_screen() {
    let route = Route::new("/ai-chat", "AIChat", Screen::AiChat).requiring_auth();
    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "path": "/ai-chat",
            "name": "AIChat",
            "screen": "ai-chat",
            "requires_auth": true,
        })
    );
}

#[test]
fn route_deserializes_with_public_default() {
    let route: Route =
        serde_json::from_str(r#"{ "path": "/register", "name": "Register", "screen": "register" }"#).unwrap();
    assert_eq!(route, Route::new("/register", "Register", Screen::Register));
}

#[test]
fn screen_slug_matches_serialized_name() {
    for screen in [
        Screen::Login,
        Screen::Register,
        Screen::Menu,
        Screen::AiChat,
        Screen::ImageRecognition,
    ] {
        assert_eq!(serde_json::to_value(screen).unwrap(), screen.slug());
    }
}
