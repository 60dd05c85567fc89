//! # Request Payload Construction
//!
//! Builds the JSON body the repository manager expects when creating a proxy
//! repository. The wire shape is camelCase and the manager rejects bodies
//! with missing sub-objects, so `storage`, `proxy`, `negativeCache`, and
//! `httpClient` are always emitted, populated with conservative cache
//! defaults when the manifest does not say otherwise.
//!
//! Some formats need an extra attributes section: Maven proxies require
//! `maven.versionPolicy`/`maven.layoutPolicy`, NuGet proxies commonly carry
//! `nugetProxy.queryCacheItemMaxAge`, and the remaining formats accept an
//! empty placeholder section. [`build`] is a pure function of its inputs;
//! attaching a new format section is local to this module.

use serde::Serialize;

use crate::defaults;
use crate::formats::CanonicalFormat;
use crate::manifest::RepositoryDescriptor;

/// The outbound proxy-repository creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRepositoryRequest {
    pub name: String,
    pub online: bool,
    pub storage: StorageAttributes,
    pub proxy: ProxyAttributes,
    pub negative_cache: NegativeCacheAttributes,
    pub http_client: HttpClientAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<MavenAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuget_proxy: Option<NugetProxyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pypi: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubygems: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yum: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go: Option<EmptyAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<EmptyAttributes>,
}

/// Storage settings: which blob store backs the repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageAttributes {
    pub blob_store_name: String,
    pub strict_content_type_validation: bool,
}

/// Proxy settings: the upstream and how long fetched content stays fresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyAttributes {
    pub remote_url: String,
    pub content_max_age: u32,
    pub metadata_max_age: u32,
}

/// Negative-cache settings: how long upstream 404s are remembered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeCacheAttributes {
    pub enabled: bool,
    pub time_to_live: u32,
}

/// Outbound HTTP client settings for the proxy connection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpClientAttributes {
    pub blocked: bool,
    pub auto_block: bool,
}

/// Maven-specific attributes. Required by the create endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenAttributes {
    pub version_policy: VersionPolicy,
    pub layout_policy: LayoutPolicy,
}

/// Which Maven artifact versions the repository serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VersionPolicy {
    #[default]
    Release,
    Snapshot,
    Mixed,
}

/// How strictly Maven repository layout is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutPolicy {
    #[default]
    Strict,
    Permissive,
}

/// NuGet-specific attributes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NugetProxyAttributes {
    pub query_cache_item_max_age: u32,
}

/// Empty placeholder section for formats whose proxies need no extra
/// attributes. Serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyAttributes {}

/// Build the create payload for one descriptor and its resolved format.
///
/// Pure: no I/O, no side effects. The same inputs always produce the same
/// body, which is what makes the dry-run preview a trustworthy rendition of
/// the real request.
pub fn build(descriptor: &RepositoryDescriptor, format: CanonicalFormat) -> ProxyRepositoryRequest {
    let mut request = ProxyRepositoryRequest {
        name: descriptor.name.clone(),
        online: true,
        storage: StorageAttributes {
            blob_store_name: descriptor.blob_store.clone(),
            strict_content_type_validation: true,
        },
        proxy: ProxyAttributes {
            remote_url: descriptor.proxy_url.to_string(),
            content_max_age: defaults::CONTENT_MAX_AGE,
            metadata_max_age: defaults::METADATA_MAX_AGE,
        },
        negative_cache: NegativeCacheAttributes {
            enabled: true,
            time_to_live: defaults::NEGATIVE_CACHE_TTL,
        },
        http_client: HttpClientAttributes {
            blocked: false,
            auto_block: true,
        },
        maven: None,
        nuget_proxy: None,
        npm: None,
        pypi: None,
        docker: None,
        rubygems: None,
        yum: None,
        helm: None,
        go: None,
        cargo: None,
    };

    match format {
        CanonicalFormat::Maven2 => {
            request.maven = Some(MavenAttributes {
                version_policy: VersionPolicy::Release,
                layout_policy: LayoutPolicy::Strict,
            });
        }
        CanonicalFormat::Nuget => {
            request.nuget_proxy = Some(NugetProxyAttributes {
                query_cache_item_max_age: defaults::NUGET_QUERY_CACHE_MAX_AGE,
            });
        }
        CanonicalFormat::Npm => request.npm = Some(EmptyAttributes::default()),
        CanonicalFormat::Pypi => request.pypi = Some(EmptyAttributes::default()),
        CanonicalFormat::Docker => request.docker = Some(EmptyAttributes::default()),
        CanonicalFormat::Rubygems => request.rubygems = Some(EmptyAttributes::default()),
        CanonicalFormat::Yum => request.yum = Some(EmptyAttributes::default()),
        CanonicalFormat::Helm => request.helm = Some(EmptyAttributes::default()),
        CanonicalFormat::Go => request.go = Some(EmptyAttributes::default()),
        CanonicalFormat::Cargo => request.cargo = Some(EmptyAttributes::default()),
        CanonicalFormat::Raw => {}
    }

    request
}
