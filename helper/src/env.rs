/// Declare a constant holding the name of an environment variable.
#[macro_export]
macro_rules! env_var {
    ($name:ident) => {
        const $name: &'static str = stringify!($name);
    };
}

/// Load a mandatory environment variable into a validated type.
///
/// Needs `anyhow::Context` in scope and a calling function returning
/// `anyhow::Result`.
#[macro_export]
macro_rules! env_load {
    ($type:ident, $name:ident) => {
        $type::try_new(
            std::env::var($name)
                .with_context(|| format!("Missing {} env var", $name))?,
        )
        .with_context(|| format!("{} was not formatted right", $name))?
    };
    ($type:ident, $name:ident, $type_raw:ident) => {
        $type::try_new(
            std::env::var($name)
                .with_context(|| format!("Missing {} env var", $name))?
                .parse::<$type_raw>()
                .with_context(|| {
                    format!(
                        "{} env var cannot be parsed in the correct type",
                        $name
                    )
                })?,
        )
        .with_context(|| format!("{} was not formatted right", $name))?
    };
}

/// Same as [env_load] but an unset variable yields `None`.
#[macro_export]
macro_rules! env_load_opt {
    ($type:ident, $name:ident) => {
        match std::env::var($name) {
            Ok(raw) => Some($type::try_new(raw).with_context(|| {
                format!("{} was not formatted right", $name)
            })?),
            Err(std::env::VarError::NotPresent) => None,
            Err(err) => Err::<Option<$type>, _>(err)
                .with_context(|| format!("{} is not valid unicode", $name))?,
        }
    };
}
