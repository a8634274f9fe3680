//! Angular component template (`.ts`).

use super::inner_markup;
use crate::icon::IconMetadata;

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let symbol = format!("{}Logo", meta.acronym);
    let inner = inner_markup(svg);
    let name = &meta.name;
    let display_name = &meta.display_name;
    let description = &meta.description;

    format!(
        r#"import {{ Component, Input }} from '@angular/core';

/**
 * {display_name} Icon
 *
 * {description}
 */
@Component({{
  selector: '{class_prefix}-{name}',
  template: `
    <svg
      [attr.width]="size"
      [attr.height]="size"
      viewBox="0 0 24 24"
      fill="none"
      xmlns="http://www.w3.org/2000/svg"
      [class]="'ph-icon {class_prefix}-{name} ' + className"
      [style]="style"
      role="img"
      [attr.aria-label]="ariaLabel || '{display_name}'"
    >
      {inner}
    </svg>
  `,
  styles: [`
    .ph-icon {{
      display: inline-block;
      vertical-align: middle;
    }}
  `]
}})
export class {symbol}Component {{
  @Input() size: number | string = 24;
  @Input() color: string = 'currentColor';
  @Input() className: string = '';
  @Input() style: Record<string, any> = {{}};
  @Input() ariaLabel: string = '{display_name}';
}}

export const {symbol} = {symbol}Component;
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    #[test]
    fn test_angular_component_shape() {
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
        assert!(out.contains("selector: 'ph-icon-department-of-health'"));
        assert!(out.contains("export class DOHLogoComponent"));
        // the index export line references DOHLogo, so the alias must exist
        assert!(out.contains("export const DOHLogo = DOHLogoComponent;"));
    }
}
