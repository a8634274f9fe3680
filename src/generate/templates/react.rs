//! React component template (`.tsx`).

use super::inner_markup;
use crate::icon::IconMetadata;

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let symbol = format!("{}Logo", meta.acronym);
    let inner = inner_markup(svg);
    let name = &meta.name;
    let display_name = &meta.display_name;
    let description = &meta.description;

    format!(
        r#"import React from 'react';
import {{ IconProps }} from '../types';

/**
 * {display_name} Icon
 *
 * {description}
 */
export const {symbol}: React.FC<IconProps> = ({{
  size = 24,
  color = 'currentColor',
  className = '',
  style = {{}},
  ...props
}}) => {{
  return (
    <svg
      width={{size}}
      height={{size}}
      viewBox="0 0 24 24"
      fill="none"
      xmlns="http://www.w3.org/2000/svg"
      className={{`ph-icon {class_prefix}-{name} ${{className}}`}}
      style={{style}}
      role="img"
      aria-label="{display_name}"
      {{...props}}
    >
      {inner}
    </svg>
  );
}};

{symbol}.displayName = '{symbol}';

export default {symbol};
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    fn meta() -> IconMetadata {
        IconDraft {
            agency_name: "Department of Health".to_string(),
            official_name: "Department of Health".to_string(),
            acronym: "DOH".to_string(),
            branch: Branch::Executive,
            category: Category::CabinetDepartments,
            description: None,
            keywords: vec![],
            official_website: None,
            author: "Test".to_string(),
            license: "MIT".to_string(),
            is_official: true,
            has_permission: true,
        }
        .into_metadata()
        .unwrap()
    }

    #[test]
    fn test_react_component_shape() {
        let out = render(
            &meta(),
            r#"<svg viewBox="0 0 24 24"><path d="M0 0h24"/></svg>"#,
            "ph-icon",
        );
        assert!(out.contains("export const DOHLogo: React.FC<IconProps>"));
        assert!(out.contains("ph-icon ph-icon-department-of-health"));
        assert!(out.contains(r#"aria-label="Department of Health""#));
        assert!(out.contains(r#"<path d="M0 0h24"/>"#));
        assert!(!out.contains("<svg viewBox")); // shell replaced by the JSX svg
        assert!(out.contains("export default DOHLogo;"));
    }
}
