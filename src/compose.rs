use crate::models::RawPayload;

/// Attribution prepended to generated files unless `--no-credits` is given.
pub const BANNER: &str =
    "# Generated by gitignite\n# Template: https://github.com/github/gitignore\n\n";

pub fn compose(payload: RawPayload, no_credits: bool) -> RawPayload {
    if no_credits {
        return payload;
    }

    let mut out = Vec::with_capacity(BANNER.len() + payload.len());
    out.extend_from_slice(BANNER.as_bytes());
    out.extend_from_slice(&payload);
    out
}
