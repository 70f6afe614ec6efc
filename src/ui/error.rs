use railgen::domain::entities::CatalogError;
use railgen::domain::ports::ServiceError;
use railgen::domain::value_objects::ValidationError;
use railgen::{RailError, SessionError};

use crate::ui::blocks::error::ErrorBlock;

/// What went wrong, classified by the innermost domain error in the chain
enum Failure<'a> {
    Service(&'a ServiceError),
    Validation(&'a ValidationError),
    Catalog,
    NotSubmitted,
    Config,
    Other,
}

fn classify(err: &anyhow::Error) -> Failure<'_> {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ServiceError>() {
            return Failure::Service(e);
        }
        if let Some(e) = cause.downcast_ref::<ValidationError>() {
            return Failure::Validation(e);
        }
        if cause.downcast_ref::<CatalogError>().is_some() {
            return Failure::Catalog;
        }
        if let Some(e) = cause.downcast_ref::<SessionError>() {
            return classify_session(e);
        }
        if let Some(e) = cause.downcast_ref::<RailError>() {
            return match e {
                RailError::Service(s) => Failure::Service(s),
                RailError::Validation(v) => Failure::Validation(v),
                RailError::Catalog(_) => Failure::Catalog,
                RailError::Session(s) => classify_session(s),
                RailError::InvalidConfig { .. } | RailError::InvalidValue { .. } => {
                    Failure::Config
                }
                RailError::Io(_) => Failure::Other,
            };
        }
    }
    Failure::Other
}

fn classify_session(err: &SessionError) -> Failure<'_> {
    match err {
        SessionError::Service(e) => Failure::Service(e),
        SessionError::Validation(e) => Failure::Validation(e),
        SessionError::Catalog(_) => Failure::Catalog,
        SessionError::NotSubmitted => Failure::NotSubmitted,
    }
}

fn service_fix(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::RateLimited { .. } => "Wait a minute before submitting again.",
        ServiceError::Unavailable { .. } | ServiceError::Transport { .. } => {
            "Check your connection, or point --api-url / RAILGEN_API_URL at a reachable service."
        }
        ServiceError::Rejected { status: 404, .. } => {
            "Check the license id; only licenses stored by the service can be downloaded."
        }
        ServiceError::Rejected { .. } => "Review the selected restrictions and try again.",
        ServiceError::Decode { .. } => {
            "The service answered in an unexpected format; check that --api-url points at the license API."
        }
    }
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let message = err.to_string();
    let block = match classify(err) {
        Failure::Service(e) => {
            let detail = e.to_string();
            let wrapped = message != detail;
            let mut block = ErrorBlock::new("LICENSE SERVICE", message);
            if let Some(status) = e.status() {
                block = block.with_context(format!("HTTP {status}"));
            }
            if wrapped {
                block = block.with_context(detail);
            }
            block.with_fix(service_fix(e))
        }
        Failure::Validation(e) => {
            let fix = match e {
                ValidationError::EmptyArtefactName => "Pass a non-empty --name.",
                ValidationError::NoSpecification => {
                    "Pass at least one --spec (data, application, model, sourcecode)."
                }
            };
            ErrorBlock::new("INCOMPLETE LICENSE", message).with_fix(fix)
        }
        Failure::Catalog => ErrorBlock::new("CATALOG", message)
            .with_fix("The service published an inconsistent catalog; try again later."),
        Failure::NotSubmitted => ErrorBlock::new("DOWNLOAD", message)
            .with_fix("Submit the license before downloading it."),
        Failure::Config => ErrorBlock::new("CONFIG", message)
            .with_fix("Check the flag, the railgen.toml entry or the RAILGEN_* variable that set it."),
        Failure::Other => ErrorBlock::new("ERROR", message),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        if let Failure::Service(e) = classify(err) {
            output["status"] = e.status().into();
            output["rate_limited"] = e.is_rate_limited().into();
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
