use std::env::{consts::EXE_SUFFIX, var};

/// Location of `glslangValidator` inside a Vulkan SDK installation.
pub fn default_tool_template() -> String {
    format!("%VULKAN_SDK%/Bin/glslangValidator{}", EXE_SUFFIX)
}

/// Expands `%VAR%`, `${VAR}` and `$VAR` references from the process
/// environment. Unset variables are left verbatim.
pub fn expand_env(template: &str) -> String {
    expand(template, |name| var(name).ok())
}

pub fn expand(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(|c: char| c == '%' || c == '$') {
        expanded.push_str(&rest[..start]);
        let tail = &rest[start..];
        let (name, len) = match reference(tail) {
            Some(reference) => reference,
            None => {
                expanded.push_str(&tail[..1]);
                rest = &tail[1..];
                continue;
            }
        };
        match lookup(name) {
            Some(value) => expanded.push_str(&value),
            None => expanded.push_str(&tail[..len]),
        }
        rest = &tail[len..];
    }
    expanded.push_str(rest);
    expanded
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// `tail` starts with the sigil; returns the variable name and the length of
// the whole reference.
fn reference(tail: &str) -> Option<(&str, usize)> {
    let body = &tail[1..];
    let (name, len) = if tail.starts_with('%') {
        let end = body.find('%')?;
        (&body[..end], end + 2)
    } else if let Some(braced) = body.strip_prefix('{') {
        let end = braced.find('}')?;
        (&braced[..end], end + 3)
    } else {
        let end = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());
        (&body[..end], end + 1)
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return None;
    }
    Some((name, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdk(name: &str) -> Option<String> {
        match name {
            "VULKAN_SDK" => Some("/opt/vulkan".into()),
            _ => None,
        }
    }

    #[test]
    fn percent_references_are_expanded() {
        assert_eq!(
            expand("%VULKAN_SDK%/Bin/glslangValidator", sdk),
            "/opt/vulkan/Bin/glslangValidator"
        );
    }

    #[test]
    fn dollar_references_are_expanded() {
        assert_eq!(expand("${VULKAN_SDK}/bin", sdk), "/opt/vulkan/bin");
        assert_eq!(expand("$VULKAN_SDK/bin", sdk), "/opt/vulkan/bin");
    }

    #[test]
    fn unset_variables_stay_verbatim() {
        assert_eq!(expand("%MISSING%/bin", sdk), "%MISSING%/bin");
        assert_eq!(expand("${MISSING}/bin", sdk), "${MISSING}/bin");
        assert_eq!(expand("$MISSING/bin", sdk), "$MISSING/bin");
    }

    #[test]
    fn stray_sigils_are_literal() {
        assert_eq!(expand("100% of %VULKAN_SDK%", sdk), "100% of /opt/vulkan");
        assert_eq!(expand("cost: $ 5", sdk), "cost: $ 5");
        assert_eq!(expand("trailing %", sdk), "trailing %");
        assert_eq!(expand("${open", sdk), "${open");
    }

    #[test]
    fn default_template_points_into_the_sdk() {
        let template = default_tool_template();
        assert!(template.starts_with("%VULKAN_SDK%/Bin/glslangValidator"));
        assert!(template.ends_with(EXE_SUFFIX));
    }
}
