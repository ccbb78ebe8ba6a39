//! Site merge service
//!
//! Merges the docs folders and navigation of child MkDocs sites into a master
//! site, one top-level section per child.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, SkipReason};
use crate::config::Settings;
use crate::domain::{
    fold_in, prefix_all, strip_existing, DomainError, MasterDocument, NameSource, NavNode,
    SiteConfig, SiteIdentity, SiteNav, SiteRoot, SiteSection,
};
use crate::infrastructure::traits::{FileSystem, ReportLevel, Reporter};

/// Options for a single merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Merge sites resolving to the same root into one section
    pub unify: bool,
    /// Resolve and rewrite only: no files copied, master not written
    pub dry_run: bool,
}

/// Terminal state of one child site.
#[derive(Debug)]
pub enum SiteOutcome {
    Merged {
        site: PathBuf,
        identity: SiteIdentity,
        destination: PathBuf,
    },
    Skipped {
        site: PathBuf,
        reason: SkipReason,
    },
}

impl SiteOutcome {
    pub fn is_merged(&self) -> bool {
        matches!(self, SiteOutcome::Merged { .. })
    }
}

/// Result of a merge run.
#[derive(Debug)]
pub struct MergeReport {
    /// Path of the master configuration file
    pub master_config: PathBuf,
    /// Master document with the merged navigation
    pub document: MasterDocument,
    /// One outcome per requested site, in input order
    pub outcomes: Vec<SiteOutcome>,
    /// Existing master entries replaced by this run
    pub replaced: usize,
    /// Whether the master configuration was written
    pub written: bool,
}

/// A child site that passed validation.
struct LoadedSite {
    config_path: PathBuf,
    config: SiteConfig,
    nav: Vec<NavNode>,
    docs: PathBuf,
}

/// Service for merging child sites into a master site.
pub struct MergeService {
    fs: Arc<dyn FileSystem>,
    reporter: Arc<dyn Reporter>,
    settings: Arc<Settings>,
}

impl MergeService {
    /// Create a new merge service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            reporter,
            settings,
        }
    }

    /// Merge `sites` into `master_site` and write the master configuration.
    ///
    /// Sites are processed in order. A site that cannot be merged is skipped and
    /// reported; only a missing or invalid master configuration and a site using
    /// the legacy `pages` key abort the run, in which case nothing is written.
    #[instrument(skip(self))]
    pub fn run(
        &self,
        master_site: &Path,
        sites: &[PathBuf],
        options: MergeOptions,
    ) -> ApplicationResult<MergeReport> {
        let mut report = self.merge(master_site, sites, options)?;

        if options.dry_run {
            self.report(
                ReportLevel::Info,
                format!("Dry run: {} not written", report.master_config.display()),
            );
            return Ok(report);
        }

        let yaml = report.document.to_yaml_string()?;
        self.fs
            .write(&report.master_config, &yaml)
            .with_path_context("write master configuration", &report.master_config)?;
        info!("wrote {}", report.master_config.display());
        report.written = true;
        Ok(report)
    }

    /// Merge without persisting the master configuration.
    pub fn merge(
        &self,
        master_site: &Path,
        sites: &[PathBuf],
        options: MergeOptions,
    ) -> ApplicationResult<MergeReport> {
        if sites.is_empty() {
            self.report(
                ReportLevel::Error,
                "Please specify one or more sites to merge to the master site.\n\
                 Use \"mkdocs-merge run -h\" for more information.",
            );
            return Err(ApplicationError::NoSites);
        }

        let (master_config, mut document) = self.load_master(master_site)?;
        let master_docs_root =
            master_site.join(document.docs_dir_or(&self.settings.default_docs_dir));
        debug!("merge: master docs root={}", master_docs_root.display());

        let roots = self.roots_being_merged(sites);
        let (kept, removed) = strip_existing(std::mem::take(&mut document.navigation), &roots);
        document.navigation = kept;
        let replaced = removed.len();
        let removed_roots: HashSet<SiteRoot> = removed
            .iter()
            .filter_map(NavNode::title)
            .map(SiteRoot::from_name)
            .collect();
        debug!("merge: {} existing entries replaced", replaced);

        let mut sections: Vec<SiteSection> = Vec::new();
        let mut outcomes = Vec::with_capacity(sites.len());
        for site in sites {
            let outcome = self.merge_site(
                site,
                &master_docs_root,
                options,
                &removed_roots,
                &mut sections,
            )?;
            if let SiteOutcome::Skipped { reason, .. } = &outcome {
                warn!("skipped {}: {}", site.display(), reason);
                self.report(
                    ReportLevel::Warning,
                    format!("{}. This site will be skipped.", reason),
                );
            }
            outcomes.push(outcome);
        }

        document
            .navigation
            .extend(sections.into_iter().map(NavNode::from));

        Ok(MergeReport {
            master_config,
            document,
            outcomes,
            replaced,
            written: false,
        })
    }

    /// Load and parse the master configuration.
    pub fn load_master(&self, master_site: &Path) -> ApplicationResult<(PathBuf, MasterDocument)> {
        let path = master_site.join(&self.settings.config_file);
        if !self.fs.is_file(&path) {
            self.report(
                ReportLevel::Error,
                format!(
                    "Could not find the master site yml file, make sure it exists: {}",
                    path.display()
                ),
            );
            return Err(ApplicationError::MasterConfigMissing(path));
        }

        let content = self
            .fs
            .read_to_string(&path)
            .with_path_context("read master configuration", &path)?;
        match MasterDocument::parse(&content) {
            Ok(document) => Ok((path, document)),
            Err(DomainError::LegacyNavigation) => {
                self.report_legacy(&path);
                Err(ApplicationError::LegacyNavigation(path))
            }
            Err(source) => Err(ApplicationError::MasterConfigInvalid { path, source }),
        }
    }

    /// Load and parse a child site's configuration.
    pub fn load_site(&self, site: &Path) -> Result<(PathBuf, SiteConfig), SkipReason> {
        let path = site.join(&self.settings.config_file);
        if !self.fs.is_file(&path) {
            return Err(SkipReason::ConfigMissing(path));
        }
        let content = match self.fs.read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return Err(SkipReason::ConfigUnreadable { path, source }),
        };
        match SiteConfig::parse(&content) {
            Ok(config) => Ok((path, config)),
            Err(source) => Err(SkipReason::ConfigParse { path, source }),
        }
    }

    /// Name, root and navigation of a site, as it would be merged.
    pub fn inspect_site(&self, site: &Path) -> ApplicationResult<(SiteIdentity, Vec<NavNode>)> {
        let (config_path, config) = self.load_site(site)?;
        let nav = match config.nav {
            SiteNav::Present(ref nav) => nav.clone(),
            SiteNav::Legacy => return Err(ApplicationError::LegacyNavigation(config_path)),
            SiteNav::Missing => return Err(SkipReason::NavigationMissing(config_path).into()),
        };
        Ok((self.resolve_identity(site, &config), nav))
    }

    /// Roots of the sites that will replace existing master entries.
    ///
    /// Only sites that pass every check short of copying are counted, so a site
    /// that will be skipped never removes its previous entry.
    pub fn roots_being_merged(&self, sites: &[PathBuf]) -> HashSet<SiteRoot> {
        sites
            .iter()
            .filter_map(|site| {
                let loaded = self.validate_site(site).ok()?;
                Some(self.resolve_identity(site, &loaded.config).root)
            })
            .collect()
    }

    /// Run the per-site pipeline: validate, resolve, copy, rewrite, aggregate.
    fn merge_site(
        &self,
        site: &Path,
        master_docs_root: &Path,
        options: MergeOptions,
        removed_roots: &HashSet<SiteRoot>,
        sections: &mut Vec<SiteSection>,
    ) -> ApplicationResult<SiteOutcome> {
        self.report(
            ReportLevel::Info,
            format!("Attempting to merge site: {}", site.display()),
        );

        let loaded = match self.validate_site(site) {
            Ok(loaded) => loaded,
            Err(SiteCheck::Skip(reason)) => {
                return Ok(SiteOutcome::Skipped {
                    site: site.to_path_buf(),
                    reason,
                })
            }
            Err(SiteCheck::Legacy(path)) => {
                self.report_legacy(&path);
                return Err(ApplicationError::LegacyNavigation(path));
            }
        };

        let identity = self.resolve_identity(site, &loaded.config);
        if identity.source == NameSource::DirectoryFallback {
            self.report(
                ReportLevel::Warning,
                format!(
                    "Could not find the \"site_name\" property in {}. \
                     Defaulting the site folder name to: \"{}\"",
                    loaded.config_path.display(),
                    identity.name
                ),
            );
        }

        let destination = master_docs_root.join(identity.root.as_str());
        if options.dry_run {
            debug!(
                "dry run: would copy {} -> {}",
                loaded.docs.display(),
                destination.display()
            );
        } else if let Err(source) = self.fs.copy_dir(&loaded.docs, &destination) {
            return Ok(SiteOutcome::Skipped {
                site: site.to_path_buf(),
                reason: SkipReason::CopyFailed {
                    section_removed: removed_roots.contains(&identity.root),
                    site_name: identity.name,
                    source,
                },
            });
        }

        let mut nav = loaded.nav;
        prefix_all(&mut nav, identity.root.as_str());
        debug!(
            "merge: {} pages rewritten under {}",
            nav.iter().map(|node| node.page_paths().len()).sum::<usize>(),
            identity.root
        );
        fold_in(sections, SiteSection::new(&identity, nav), options.unify);

        self.report(
            ReportLevel::Success,
            format!(
                "Successfully merged site located in \"{}\" as sub-site \"{}\"",
                site.display(),
                identity.name
            ),
        );
        Ok(SiteOutcome::Merged {
            site: site.to_path_buf(),
            identity,
            destination,
        })
    }

    /// Checks that need no copying: configuration, navigation, docs folder.
    fn validate_site(&self, site: &Path) -> Result<LoadedSite, SiteCheck> {
        let (config_path, config) = self.load_site(site).map_err(SiteCheck::Skip)?;
        let nav = match &config.nav {
            SiteNav::Present(nav) => nav.clone(),
            SiteNav::Legacy => return Err(SiteCheck::Legacy(config_path)),
            SiteNav::Missing => {
                return Err(SiteCheck::Skip(SkipReason::NavigationMissing(config_path)))
            }
        };

        let docs = site.join(config.docs_dir_or(&self.settings.default_docs_dir));
        if !self.fs.is_dir(&docs) {
            return Err(SiteCheck::Skip(SkipReason::DocsFolderMissing(docs)));
        }

        Ok(LoadedSite {
            config_path,
            config,
            nav,
            docs,
        })
    }

    /// Resolve name and root; the fallback uses the canonical directory name
    /// when the given path has none (e.g. `.`).
    fn resolve_identity(&self, site: &Path, config: &SiteConfig) -> SiteIdentity {
        let dir = if site.file_name().is_some() {
            site.to_path_buf()
        } else {
            self.fs
                .canonicalize(site)
                .unwrap_or_else(|_| site.to_path_buf())
        };
        SiteIdentity::resolve(config.site_name.as_deref(), &dir)
    }

    fn report_legacy(&self, config_path: &Path) {
        self.report(
            ReportLevel::Error,
            format!(
                "Configuration {} uses the deprecated \"pages\" entry, \
                 rename it to \"nav\". Aborting the merge.",
                config_path.display()
            ),
        );
    }

    fn report(&self, level: ReportLevel, message: impl AsRef<str>) {
        self.reporter.report(level, message.as_ref());
    }
}

/// Why `validate_site` stopped.
enum SiteCheck {
    Skip(SkipReason),
    Legacy(PathBuf),
}
