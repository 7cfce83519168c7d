use cardgrid::{BlockPipeline, CliConfig, LocalStorage, RenderEngine, RenderError};
use tempfile::TempDir;

const PAGE: &str = r#"
<html>
  <body>
    <main>
      <div class="design-support">
        <div><div>Design Tokens</div><div>Color and type variables</div></div>
        <div><div>Components</div><div>Reusable UI parts</div><div>Storybook, GitHub</div><div>/storybook,/repo</div></div>
        <div><div>Icons</div><div>Glyph set</div><div>Download</div></div>
      </div>
    </main>
  </body>
</html>"#;

fn config_for(temp_dir: &TempDir) -> CliConfig {
    let input_file = temp_dir.path().join("page.html");
    std::fs::write(&input_file, PAGE).unwrap();

    CliConfig {
        input_path: input_file.to_str().unwrap().to_string(),
        output_path: temp_dir.path().join("out").to_str().unwrap().to_string(),
        block_selector: "div.design-support".to_string(),
        output_file: "design-support.html".to_string(),
        verbose: false,
        monitor: false,
        log_json: false,
    }
}

#[tokio::test]
async fn test_end_to_end_decoration_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BlockPipeline::new(storage, config);
    let engine = RenderEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await;
    assert!(result.is_ok());

    let output_path = result.unwrap();
    assert!(output_path.ends_with("design-support.html"));

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.starts_with("<design-support-grid>"));
    assert!(html.ends_with("</design-support-grid>"));

    // One card per row, three columns regardless of count.
    assert_eq!(html.matches("<design-support-card>").count(), 3);
    assert_eq!(html.matches("cmp_design-support__column").count(), 3);

    // The linked row renders anchors with positional URLs.
    assert!(html.contains(r#"<a href="/storybook" class="headline-6">Storybook</a>"#));
    assert!(html.contains(r#"<a href="/repo" class="headline-6">GitHub</a>"#));
    // The short-URL row falls back to "#".
    assert!(html.contains(r##"<a href="#" class="headline-6">Download</a>"##));

    // The linkless card carries no divider; the linked ones do.
    assert_eq!(html.matches("cmp_design-support__divider").count(), 2);
}

#[tokio::test]
async fn test_decorating_the_same_document_twice_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir);

    let run = |config: CliConfig| async {
        let pipeline = BlockPipeline::new(LocalStorage::new(".".to_string()), config);
        RenderEngine::new(pipeline).run().await.unwrap()
    };

    let first_path = run(config.clone()).await;
    let first = std::fs::read_to_string(&first_path).unwrap();
    let second_path = run(config).await;
    let second = std::fs::read_to_string(&second_path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_input_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir);
    config.input_path = temp_dir
        .path()
        .join("missing.html")
        .to_str()
        .unwrap()
        .to_string();

    let pipeline = BlockPipeline::new(LocalStorage::new(".".to_string()), config);
    let err = RenderEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, RenderError::IoError(_)));
}

#[tokio::test]
async fn test_document_without_block_fails_with_markup_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir);

    let input_file = temp_dir.path().join("plain.html");
    std::fs::write(&input_file, "<html><body><p>nothing here</p></body></html>").unwrap();
    config.input_path = input_file.to_str().unwrap().to_string();

    let pipeline = BlockPipeline::new(LocalStorage::new(".".to_string()), config);
    let err = RenderEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, RenderError::MarkupError { .. }));
}

#[tokio::test]
async fn test_empty_block_renders_three_empty_columns() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir);

    let input_file = temp_dir.path().join("empty.html");
    std::fs::write(
        &input_file,
        r#"<html><body><div class="design-support"></div></body></html>"#,
    )
    .unwrap();
    config.input_path = input_file.to_str().unwrap().to_string();

    let pipeline = BlockPipeline::new(LocalStorage::new(".".to_string()), config);
    let output_path = RenderEngine::new(pipeline).run().await.unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(html.matches("cmp_design-support__column").count(), 3);
    assert!(!html.contains("<design-support-card>"));
}
