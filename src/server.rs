use super::*;

#[derive(Debug)]
pub struct Server(Arc<tokio::sync::Mutex<Inner>>);

impl Server {
  pub fn new(client: Client) -> Self {
    Self(Arc::new(tokio::sync::Mutex::new(Inner::new(client))))
  }

  pub async fn run() -> Result {
    let (service, socket) = LspService::new(Server::new);

    tower_lsp::Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
      .serve(service)
      .await;

    Ok(())
  }

  pub fn capabilities(client: ClientCapabilities) -> lsp::ServerCapabilities {
    lsp::ServerCapabilities {
      code_action_provider: Some(if client.code_action_literals {
        lsp::CodeActionProviderCapability::Options(lsp::CodeActionOptions {
          code_action_kinds: Some(vec![lsp::CodeActionKind::QUICKFIX]),
          ..Default::default()
        })
      } else {
        lsp::CodeActionProviderCapability::Simple(true)
      }),
      text_document_sync: Some(lsp::TextDocumentSyncCapability::Options(
        lsp::TextDocumentSyncOptions {
          open_close: Some(true),
          change: Some(lsp::TextDocumentSyncKind::INCREMENTAL),
          will_save: None,
          will_save_wait_until: None,
          save: Some(
            lsp::SaveOptions {
              include_text: Some(false),
            }
            .into(),
          ),
        },
      )),
      workspace: client.workspace_folders.then(|| {
        lsp::WorkspaceServerCapabilities {
          workspace_folders: Some(lsp::WorkspaceFoldersServerCapabilities {
            supported: Some(true),
            change_notifications: None,
          }),
          file_operations: None,
        }
      }),
      ..Default::default()
    }
  }
}

#[tower_lsp::async_trait]
impl LanguageServer for Server {
  async fn code_action(
    &self,
    params: lsp::CodeActionParams,
  ) -> Result<Option<lsp::CodeActionResponse>, jsonrpc::Error> {
    self.0.lock().await.code_action(params)
  }

  async fn did_change(&self, params: lsp::DidChangeTextDocumentParams) {
    self.0.lock().await.did_change(params).await
  }

  async fn did_change_configuration(
    &self,
    params: lsp::DidChangeConfigurationParams,
  ) {
    self.0.lock().await.did_change_configuration(params).await
  }

  async fn did_close(&self, params: lsp::DidCloseTextDocumentParams) {
    self.0.lock().await.did_close(params).await
  }

  async fn did_open(&self, params: lsp::DidOpenTextDocumentParams) {
    self.0.lock().await.did_open(params).await
  }

  async fn did_save(&self, params: lsp::DidSaveTextDocumentParams) {
    self.0.lock().await.did_save(params).await
  }

  async fn initialize(
    &self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    self.0.lock().await.initialize(params)
  }

  async fn initialized(&self, params: lsp::InitializedParams) {
    self.0.lock().await.initialized(params).await
  }

  async fn shutdown(&self) -> Result<(), jsonrpc::Error> {
    self.0.lock().await.shutdown()
  }
}

#[derive(Debug)]
pub(crate) struct Inner {
  capabilities: ClientCapabilities,
  client: Client,
  documents: Documents,
  initialized: bool,
  registry: Arc<Registry>,
  root: Option<lsp::Url>,
  settings: Settings,
  source: Option<SourceFile>,
}

impl Inner {
  fn new(client: Client) -> Self {
    Self {
      capabilities: ClientCapabilities::default(),
      client,
      documents: Documents::new(),
      initialized: false,
      registry: Arc::default(),
      root: None,
      settings: Settings::default(),
      source: None,
    }
  }

  fn code_action(
    &self,
    params: lsp::CodeActionParams,
  ) -> Result<Option<lsp::CodeActionResponse>, jsonrpc::Error> {
    let uri = params.text_document.uri;

    let actions = params
      .context
      .diagnostics
      .iter()
      .filter_map(|diagnostic| {
        let replacement = Diagnostic::replacement(diagnostic)?;

        let edit = lsp::TextEdit {
          range: diagnostic.range,
          new_text: replacement.to_string(),
        };

        Some(lsp::CodeActionOrCommand::CodeAction(lsp::CodeAction {
          title: format!("Replace with `{replacement}`"),
          kind: Some(lsp::CodeActionKind::QUICKFIX),
          diagnostics: Some(vec![diagnostic.clone()]),
          edit: Some(lsp::WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), vec![edit])])),
            ..Default::default()
          }),
          is_preferred: Some(true),
          ..Default::default()
        }))
      })
      .collect::<Vec<_>>();

    Ok((!actions.is_empty()).then_some(actions))
  }

  fn config(&self) -> Config {
    Config {
      max_problems: self.settings.max_number_of_problems,
      related_information: self.capabilities.related_information,
      root: self
        .source
        .as_ref()
        .map(|source| source.root.clone())
        .unwrap_or_default(),
    }
  }

  async fn did_change(&mut self, params: lsp::DidChangeTextDocumentParams) {
    let uri = params.text_document.uri.clone();

    if let Some(document) = self.documents.get_mut(&uri) {
      document.apply_change(params);
      self.publish_diagnostics(&uri).await;
    }
  }

  async fn did_change_configuration(
    &mut self,
    params: lsp::DidChangeConfigurationParams,
  ) {
    if self.capabilities.configuration {
      self.fetch_settings().await;
    } else {
      match Settings::from_section(&params.settings) {
        Ok(settings) => self.settings = settings.unwrap_or_default(),
        Err(error) => self.show_error(error).await,
      }
    }

    self.reload().await;
    self.publish_all().await;
  }

  async fn did_close(&mut self, params: lsp::DidCloseTextDocumentParams) {
    let uri = params.text_document.uri;

    if self.documents.remove(&uri).is_some() {
      self.client.publish_diagnostics(uri, vec![], None).await;
    }
  }

  async fn did_open(&mut self, params: lsp::DidOpenTextDocumentParams) {
    let uri = params.text_document.uri.clone();

    self.documents.insert(uri.clone(), Document::from(params));

    self.publish_diagnostics(&uri).await;
  }

  async fn did_save(&mut self, params: lsp::DidSaveTextDocumentParams) {
    let is_source = self
      .source
      .as_ref()
      .and_then(|source| source.uri().ok())
      .is_some_and(|uri| uri == params.text_document.uri);

    if is_source {
      log::info!("source file saved, reloading definitions");
      self.reload().await;
      self.publish_all().await;
    }
  }

  async fn fetch_settings(&mut self) {
    let items = vec![lsp::ConfigurationItem {
      scope_uri: None,
      section: Some(SECTION.to_string()),
    }];

    let value = match self.client.configuration(items).await {
      Ok(values) => values.into_iter().next().unwrap_or(Value::Null),
      Err(error) => {
        log::warn!("failed to fetch configuration: {error}");
        return;
      }
    };

    // Clients without the section answer `null`, which keeps the settings
    // received as initialization options.
    if value.is_null() {
      log::debug!("no `{SECTION}` configuration, keeping current settings");
      return;
    }

    match Settings::from_value(value) {
      Ok(settings) => self.settings = settings,
      Err(error) => self.show_error(error).await,
    }
  }

  fn initialize(
    &mut self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    log::info!("Starting {} language server...", env!("CARGO_PKG_NAME"));

    self.capabilities = ClientCapabilities::from(&params.capabilities);

    #[allow(deprecated)]
    let root = params.root_uri.clone().or_else(|| {
      params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| folder.uri.clone())
    });

    self.root = root;

    if let Some(options) = params.initialization_options {
      let settings = match Settings::from_section(&options) {
        Ok(Some(settings)) => Ok(settings),
        Ok(None) => Settings::from_value(options),
        Err(error) => Err(error),
      };

      self.settings = settings
        .map_err(|error| jsonrpc::Error::invalid_params(error.to_string()))?;
    }

    Ok(lsp::InitializeResult {
      capabilities: Server::capabilities(self.capabilities),
      server_info: Some(lsp::ServerInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
      }),
    })
  }

  async fn initialized(&mut self, _: lsp::InitializedParams) {
    if self.capabilities.configuration {
      let registration = lsp::Registration {
        id: SECTION.to_string(),
        method: "workspace/didChangeConfiguration".to_string(),
        register_options: None,
      };

      if let Err(error) =
        self.client.register_capability(vec![registration]).await
      {
        log::warn!("failed to register for configuration changes: {error}");
      }

      self.fetch_settings().await;
    }

    self.initialized = true;

    self
      .client
      .show_message(
        lsp::MessageType::INFO,
        format!("{} initialized", env!("CARGO_PKG_NAME")),
      )
      .await;

    self.reload().await;
    self.publish_all().await;
  }

  /// Resolves the configured source file and extracts its definitions. The
  /// registry is left empty when anything fails.
  fn load(&mut self) -> Result<(), Error> {
    self.registry = Arc::default();

    self.source = self
      .settings
      .source_file()
      .map(|configured| SourceFile::resolve(self.root.as_ref(), configured))
      .transpose()?;

    if let Some(source) = &self.source {
      self.registry = Arc::new(source.load()?);
    }

    Ok(())
  }

  async fn publish_all(&self) {
    for uri in self.documents.keys() {
      self.publish_diagnostics(uri).await;
    }
  }

  async fn publish_diagnostics(&self, uri: &lsp::Url) {
    if !self.initialized {
      return;
    }

    if let Some(document) = self.documents.get(uri) {
      let config = self.config();

      let registry = Arc::clone(&self.registry);

      let diagnostics =
        Validator::new(&registry, &config).validate(uri, &document.content);

      self
        .client
        .publish_diagnostics(uri.clone(), diagnostics, Some(document.version))
        .await;
    }
  }

  async fn reload(&mut self) {
    if let Err(error) = self.load() {
      self.show_error(error).await;
    }
  }

  async fn show_error(&self, error: Error) {
    log::error!("{error}");

    self
      .client
      .show_message(lsp::MessageType::ERROR, error.to_string())
      .await;
  }

  fn shutdown(&self) -> Result<(), jsonrpc::Error> {
    Ok(())
  }
}
