//! Combined script assembly.
//!
//! Each extracted payload is rebuilt as an immediately-invoked arrow
//! function inside its own `try`/`catch`, so at injection time one broken
//! evasion logs a warning and the rest still run. The blocks are
//! concatenated after the shared prelude and its init call, giving a single
//! self-invoking script with no free variables beyond browser built-ins.

use veil_extract::ExtractedSignature;

use crate::error::{BundleError, Result};

/// Header stamped on the generated script.
pub const SCRIPT_HEADER: &str = "// AUTO-GENERATED - do not edit. Regenerate: veil bundle";

/// Statement that initializes the shared utilities before any payload runs.
pub const INIT_STATEMENT: &str = "utils.init();";

/// One extracted evasion, ready for assembly.
#[derive(Debug, Clone)]
pub struct Payload {
    pub name: String,
    pub signature: ExtractedSignature,
    /// Invoke with the shared `utils` object as sole argument.
    pub needs_utils: bool,
}

impl Payload {
    /// Render this payload's isolated invocation block.
    fn render(&self) -> String {
        let args = if self.needs_utils { "utils" } else { "" };
        let call = format!(
            "(({}) => {})({});",
            self.signature.params, self.signature.body, args
        );
        format!(
            "  // Evasion: {name}\n  try {{\n    {call}\n  }} catch (e) {{ console.warn('[stealth] {name}:', e.message); }}",
            name = self.name,
            call = call,
        )
    }
}

/// Concatenate prelude, init statement, and payload blocks into the final
/// script.
///
/// Payloads are emitted in ascending name order regardless of input order,
/// so the output is byte-identical across runs and enumeration orders. An
/// empty batch is refused: a script with nothing to do means extraction
/// failed across the board, and emitting it would mask that.
pub fn assemble(prelude: &str, mut payloads: Vec<Payload>) -> Result<String> {
    if payloads.is_empty() {
        return Err(BundleError::NoPayloads);
    }
    payloads.sort_by(|a, b| a.name.cmp(&b.name));

    let blocks = payloads
        .iter()
        .map(Payload::render)
        .collect::<Vec<_>>()
        .join("\n\n");
    let lines = [
        SCRIPT_HEADER,
        "(function () {",
        "",
        prelude,
        "",
        INIT_STATEMENT,
        "",
        blocks.as_str(),
        "",
        "})();",
    ];
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, params: &str, body: &str, needs_utils: bool) -> Payload {
        Payload {
            name: name.to_string(),
            signature: ExtractedSignature {
                params: params.to_string(),
                body: body.to_string(),
            },
            needs_utils,
        }
    }

    #[test]
    fn empty_batch_is_refused() {
        assert!(matches!(
            assemble("const utils = {};", Vec::new()),
            Err(BundleError::NoPayloads)
        ));
    }

    #[test]
    fn script_opens_with_header_and_self_invokes() {
        let script = assemble(
            "const utils = {};",
            vec![payload("a", "", "{ ok(); }", false)],
        )
        .unwrap();

        assert!(script.starts_with(SCRIPT_HEADER));
        assert!(script.contains("(function () {"));
        assert!(script.ends_with("})();"));
    }

    #[test]
    fn prelude_and_init_precede_every_payload() {
        let script = assemble(
            "const utils = {};",
            vec![payload("a", "", "{ ok(); }", false)],
        )
        .unwrap();

        let prelude_at = script.find("const utils = {};").unwrap();
        let init_at = script.find(INIT_STATEMENT).unwrap();
        let payload_at = script.find("// Evasion: a").unwrap();
        assert!(prelude_at < init_at);
        assert!(init_at < payload_at);
    }

    #[test]
    fn payloads_are_name_sorted_regardless_of_input_order() {
        let shuffled = vec![
            payload("c", "", "{ c(); }", false),
            payload("a", "", "{ a(); }", false),
            payload("b", "", "{ b(); }", false),
        ];
        let script = assemble("const utils = {};", shuffled).unwrap();

        let a = script.find("// Evasion: a").unwrap();
        let b = script.find("// Evasion: b").unwrap();
        let c = script.find("// Evasion: c").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn utils_convention_passes_the_shared_argument() {
        let script = assemble(
            "const utils = {};",
            vec![
                payload("plain", "", "{ ok(); }", false),
                payload("shared", "utils", "{ utils.patch(); }", true),
            ],
        )
        .unwrap();

        assert!(script.contains("((utils) => { utils.patch(); })(utils);"));
        assert!(script.contains("(() => { ok(); })();"));
    }

    #[test]
    fn each_payload_is_wrapped_in_its_own_guard() {
        let script = assemble(
            "const utils = {};",
            vec![
                payload("x", "", "{ x(); }", false),
                payload("y", "", "{ y(); }", false),
            ],
        )
        .unwrap();

        assert_eq!(script.matches("  try {").count(), 2);
        assert!(script.contains("} catch (e) { console.warn('[stealth] x:', e.message); }"));
        assert!(script.contains("} catch (e) { console.warn('[stealth] y:', e.message); }"));
    }

    // A payload whose parameter text is garbage still assembles; the
    // failure is confined to its own guard when the script later runs.
    #[test]
    fn malformed_params_stay_inside_their_guard() {
        let script = assemble(
            "const utils = {};",
            vec![
                payload("bad", "((", "{ never(); }", false),
                payload("good", "", "{ ok(); }", false),
            ],
        )
        .unwrap();

        assert!(script.contains("(((() => { never(); })();"));
        assert!(script.contains("(() => { ok(); })();"));
    }
}
