//! Lit web component template (`.ts`).

use super::inner_markup;
use crate::icon::IconMetadata;

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let symbol = format!("{}Icon", meta.acronym);
    let inner = inner_markup(svg);
    let name = &meta.name;
    let display_name = &meta.display_name;
    let description = &meta.description;

    format!(
        r#"import {{ LitElement, html, css }} from 'lit';
import {{ customElement, property }} from 'lit/decorators.js';

/**
 * {display_name} Icon
 *
 * {description}
 */
@customElement('{class_prefix}-{name}')
export class {symbol} extends LitElement {{
  static styles = css`
    :host {{
      display: inline-block;
      vertical-align: middle;
    }}

    svg {{
      display: block;
    }}
  `;

  @property({{ type: Number }}) size = 24;
  @property({{ type: String }}) color = 'currentColor';
  @property({{ type: String }}) className = '';
  @property({{ type: String }}) ariaLabel = '{display_name}';

  render() {{
    return html`
      <svg
        width="${{this.size}}"
        height="${{this.size}}"
        viewBox="0 0 24 24"
        fill="none"
        xmlns="http://www.w3.org/2000/svg"
        class="ph-icon {class_prefix}-{name} ${{this.className}}"
        role="img"
        aria-label="${{this.ariaLabel}}"
      >
        {inner}
      </svg>
    `;
  }}
}}

declare global {{
  interface HTMLElementTagNameMap {{
    '{class_prefix}-{name}': {symbol};
  }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    #[test]
    fn test_web_component_shape() {
        let meta = IconDraft {
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
        .unwrap();

        let out = render(
            &meta,
            r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#,
            "ph-icon",
        );
        assert!(out.contains("@customElement('ph-icon-department-of-health')"));
        assert!(out.contains("export class DOHIcon extends LitElement"));
        assert!(out.contains("'ph-icon-department-of-health': DOHIcon;"));
    }
}
