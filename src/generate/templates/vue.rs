//! Vue single-file component template (`.vue`).

use super::inner_markup;
use crate::icon::IconMetadata;

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let inner = inner_markup(svg);
    let name = &meta.name;
    let display_name = &meta.display_name;
    let description = &meta.description;

    format!(
        r#"<template>
  <svg
    :width="size"
    :height="size"
    viewBox="0 0 24 24"
    fill="none"
    xmlns="http://www.w3.org/2000/svg"
    :class="`ph-icon {class_prefix}-{name} ${{className}}`"
    :style="style"
    role="img"
    :aria-label="ariaLabel || '{display_name}'"
    v-bind="$attrs"
  >
    {inner}
  </svg>
</template>

<script setup lang="ts">
/**
 * {display_name} Icon
 *
 * {description}
 */

interface Props {{
  size?: number | string;
  color?: string;
  className?: string;
  style?: Record<string, any>;
  ariaLabel?: string;
}}

withDefaults(defineProps<Props>(), {{
  size: 24,
  color: 'currentColor',
  className: '',
  style: () => ({{}}),
  ariaLabel: '{display_name}'
}});
</script>

<style scoped>
.ph-icon {{
  display: inline-block;
  vertical-align: middle;
}}
</style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    #[test]
    fn test_vue_component_shape() {
        let meta = IconDraft {
            agency_name: "Commission on Audit".to_string(),
            official_name: "Commission on Audit".to_string(),
            acronym: "COA".to_string(),
            branch: Branch::Constitutional,
            category: Category::Coa,
            description: None,
            keywords: vec![],
            official_website: None,
            author: "Test".to_string(),
            license: "MIT".to_string(),
            is_official: true,
            has_permission: true,
        }
        .into_metadata()
        .unwrap();

        let out = render(
            &meta,
            r#"<svg viewBox="0 0 24 24"><circle r="12" fill="red"/></svg>"#,
            "ph-icon",
        );
        assert!(out.starts_with("<template>"));
        assert!(out.contains("ph-icon ph-icon-commission-on-audit"));
        assert!(out.contains("ariaLabel || 'Commission on Audit'"));
        assert!(out.contains(r#"<circle r="12" fill="red"/>"#));
        assert!(out.contains("withDefaults(defineProps<Props>()"));
    }
}
