//! # SIP Header Field Types
//!
//! Typed implementations of the RFC 3261 header fields. Every field
//! implements [`HeaderField`], which provides parsing, serialization and
//! validation; the capability traits below add typed access to the parts
//! some families share.
//!
//! ## Module Structure
//!
//! ### Contract and building blocks
//!
//! - [`HeaderField`] and [`Parameterized`] - the field contract
//! - [`Parameter`], [`ParameterList`], [`ParamSpec`] - header parameters
//! - [`QValue`] / [`QualityValued`] - Accept-family weights
//! - [`MediaType`] / [`MediaTyped`] - Accept and Content-Type
//! - [`Address`] / [`Addressed`] / [`Tagged`] - To, From, Reply-To
//! - [`AuthScheme`], [`ChallengeFields`], [`CredentialFields`] - authentication
//! - [`HeaderFieldGroup`] / [`AuthHeaderGroup`] - repeated headers
//! - [`Uri`] and [`HeaderName`]
//!
//! ### Header fields
//!
//! | Field | Type |
//! |---|---|
//! | Accept, Accept-Encoding, Accept-Language | [`Accept`], [`AcceptEncoding`], [`AcceptLanguage`] |
//! | Authorization, Proxy-Authorization | [`Authorization`], [`ProxyAuthorization`] |
//! | WWW-Authenticate, Proxy-Authenticate | [`WwwAuthenticate`], [`ProxyAuthenticate`] |
//! | Authentication-Info | [`AuthenticationInfo`] |
//! | Call-Info | [`CallInfo`] |
//! | Content-Disposition, -Encoding, -Language, -Length, -Type | [`ContentDisposition`], [`ContentEncoding`], [`ContentLanguage`], [`ContentLength`], [`ContentType`] |
//! | CSeq, Date, Max-Forwards, MIME-Version | [`CSeq`], [`Date`], [`MaxForwards`], [`MimeVersion`] |
//! | From, To, Reply-To | [`From`], [`To`], [`ReplyTo`] |
//! | Priority, Retry-After, Timestamp | [`Priority`], [`RetryAfter`], [`Timestamp`] |
//! | Via, Warning | [`Via`], [`Warning`] |

pub mod header;
pub mod header_name;
pub mod param;
pub mod group;
pub mod qvalue;
pub mod media_type;
pub mod uri;
pub mod address;
pub mod auth;

pub mod accept;
pub mod accept_encoding;
pub mod accept_language;
pub mod call_info;
pub mod content_disposition;
pub mod content_encoding;
pub mod content_language;
pub mod content_length;
pub mod content_type;
pub mod cseq;
pub mod date;
pub mod from;
pub mod max_forwards;
pub mod mime_version;
pub mod priority;
pub mod reply_to;
pub mod retry_after;
pub mod timestamp;
pub mod to;
pub mod via;
pub mod warning;

pub use header::{HeaderField, Parameterized};
pub use header_name::HeaderName;
pub use param::{ParamSpec, Parameter, ParameterList};
pub use group::{AuthHeaderGroup, HeaderFieldGroup};
pub use qvalue::{parse_qvalue, AcceptParams, QValue, QualityValued};
pub use media_type::{MediaType, MediaTyped};
pub use uri::{Scheme, Uri};
pub use address::{Address, Addressed, Tagged};
pub use auth::{
    AuthScheme, AuthenticationInfo, Authorization, ChallengeFields, CredentialFields,
    ProxyAuthenticate, ProxyAuthorization, WwwAuthenticate,
};

pub use accept::Accept;
pub use accept_encoding::AcceptEncoding;
pub use accept_language::AcceptLanguage;
pub use call_info::CallInfo;
pub use content_disposition::ContentDisposition;
pub use content_encoding::ContentEncoding;
pub use content_language::ContentLanguage;
pub use content_length::ContentLength;
pub use content_type::ContentType;
pub use cseq::CSeq;
pub use date::Date;
pub use from::From;
pub use max_forwards::MaxForwards;
pub use mime_version::MimeVersion;
pub use priority::{Priority, PriorityLevel};
pub use reply_to::ReplyTo;
pub use retry_after::RetryAfter;
pub use timestamp::Timestamp;
pub use to::To;
pub use via::{Transport, Via};
pub use warning::Warning;
