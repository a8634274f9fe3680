//! Standalone preview page template (`test-<name>.html`).
//!
//! The page is self-contained: the CSS artifact is inlined in a `<style>`
//! block and the metadata JSON is embedded directly, so it renders from a
//! file:// URL without any server or fetch.

use crate::icon::IconMetadata;

pub fn render(meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
    let name = &meta.name;
    let display_name = &meta.display_name;
    let acronym = &meta.acronym;
    let branch = meta.branch.as_str();
    let category = meta.category.as_str();
    let class = format!("{class_prefix}-{name}");
    let svg_rel = format!("packages/core/icons/{branch}/{category}/{name}.svg");
    let icon_css = super::css::render(meta, svg, class_prefix);
    let metadata_json =
        serde_json::to_string_pretty(meta).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{display_name} Icon Test</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            padding: 20px;
            background-color: #f5f5f5;
        }}
        .icon-test {{
            background: white;
            padding: 20px;
            border-radius: 8px;
            margin: 10px 0;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .icon-container {{
            display: flex;
            align-items: center;
            gap: 20px;
            margin: 10px 0;
        }}
        .icon-label {{
            font-weight: bold;
            min-width: 120px;
        }}
        pre {{
            background: #f8f8f8;
            padding: 12px;
            border-radius: 4px;
            overflow-x: auto;
        }}
        code {{
            background: #f8f8f8;
            padding: 2px 4px;
            border-radius: 2px;
        }}

        /* Inlined icon stylesheet */
{icon_css}
    </style>
</head>
<body>
    <h1>🇵🇭 {display_name} ({acronym}) Icon Test</h1>

    <div class="icon-test">
        <h3>SVG Icon (Original)</h3>
        <div class="icon-container">
            <span class="icon-label">24px:</span>
            <img src="{svg_rel}" width="24" height="24" alt="{display_name} Icon 24px">
        </div>
        <div class="icon-container">
            <span class="icon-label">48px:</span>
            <img src="{svg_rel}" width="48" height="48" alt="{display_name} Icon 48px">
        </div>
        <div class="icon-container">
            <span class="icon-label">96px:</span>
            <img src="{svg_rel}" width="96" height="96" alt="{display_name} Icon 96px">
        </div>
    </div>

    <div class="icon-test">
        <h3>CSS Icon</h3>
        <div class="icon-container">
            <span class="icon-label">Small:</span>
            <i class="{class} ph-icon-sm"></i>
        </div>
        <div class="icon-container">
            <span class="icon-label">Medium:</span>
            <i class="{class} ph-icon-md"></i>
        </div>
        <div class="icon-container">
            <span class="icon-label">Large:</span>
            <i class="{class} ph-icon-lg"></i>
        </div>
        <div class="icon-container">
            <span class="icon-label">Extra Large:</span>
            <i class="{class} ph-icon-xl"></i>
        </div>
    </div>

    <div class="icon-test">
        <h3>Color Variants</h3>
        <div class="icon-container">
            <span class="icon-label">Primary:</span>
            <i class="{class} ph-icon-primary ph-icon-lg"></i>
        </div>
        <div class="icon-container">
            <span class="icon-label">Secondary:</span>
            <i class="{class} ph-icon-secondary ph-icon-lg"></i>
        </div>
        <div class="icon-container">
            <span class="icon-label">Accent:</span>
            <i class="{class} ph-icon-accent ph-icon-lg"></i>
        </div>
    </div>

    <div class="icon-test">
        <h3>Usage</h3>
        <p>React: <code>import {{ {acronym}Logo }} from '@bettergov/icons-react';</code></p>
        <p>Vue: <code>import {{ {acronym}Logo }} from '@bettergov/icons-vue';</code></p>
        <p>Angular: <code>import {{ {acronym}Logo }} from '@bettergov/icons-angular';</code></p>
        <p>Web Components: <code>&lt;{class}&gt;&lt;/{class}&gt;</code></p>
        <p>CSS: <code>&lt;i class="{class} ph-icon-md"&gt;&lt;/i&gt;</code></p>
    </div>

    <div class="icon-test">
        <h3>Metadata</h3>
        <pre>{metadata_json}</pre>
    </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    #[test]
    fn test_preview_is_self_contained() {
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
            r#"<svg viewBox="0 0 24 24"><path fill="red"/></svg>"#,
            "ph-icon",
        );
        assert!(out.contains("<title>Department of Health Icon Test</title>"));
        assert!(out.contains(
            "packages/core/icons/executive/cabinet-departments/department-of-health.svg"
        ));
        // the metadata is embedded, never fetched
        assert!(out.contains("\"displayName\": \"Department of Health\""));
        assert!(!out.contains("fetch("));
        // the stylesheet is inlined
        assert!(out.contains(".ph-icon-department-of-health::before"));
    }
}
