use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    SignUp,
    SignIn,
    Home,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignUp => "/signup",
            Route::SignIn => "/signin",
            Route::Home => "/home",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        [Route::Landing, Route::SignUp, Route::SignIn, Route::Home]
            .into_iter()
            .find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
