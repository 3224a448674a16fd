//! 渲染层
//!
//! 把视图模型插值进输出文档。无模板引擎，直接拼接HTML
//! (属性值均为程序内常量，不含用户输入，无需转义)

use super::model::ViewModel;

/// 渲染完整HTML5页面
///
/// - `title` 页面标题 (兼作`<h1>`)
/// - `model` 视图模型，每个属性渲染为一个 `<p id="键">值</p>`
///
/// 同一输入输出逐字节一致 (属性按键序插值)
pub fn render_page(title: &str, model: &ViewModel) -> String {
    // 逐属性插值
    let mut attrs = String::new();
    for (key, value) in model.iter() {
        attrs.push_str(&format!("<p id=\"{}\">{}</p>\n", key, value));
    }

    // 文档骨架
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n<h1>{}</h1>\n{}</body>\n</html>\n",
        title, title, attrs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_attributes() {
        let mut model = ViewModel::new();
        model.insert("Gitlab", "Welcome to DevOps");
        let page = render_page("DevOps Sample", &model);
        assert!(page.contains("<title>DevOps Sample</title>"));
        assert!(page.contains("<h1>DevOps Sample</h1>"));
        assert!(page.contains("<p id=\"Gitlab\">Welcome to DevOps</p>"));
    }

    /// 同一模型两次渲染逐字节一致，属性按键序出现
    #[test]
    fn same_model_renders_identically() {
        let mut model = ViewModel::new();
        model.insert("b", "2");
        model.insert("a", "1");
        let first = render_page("t", &model);
        let second = render_page("t", &model);
        assert_eq!(first, second);
        assert!(first.find("id=\"a\"").unwrap() < first.find("id=\"b\"").unwrap());
    }

    #[test]
    fn empty_model_renders_skeleton() {
        let page = render_page("t", &ViewModel::new());
        assert!(page.contains("<h1>t</h1>"));
        assert!(!page.contains("<p id="));
    }
}
