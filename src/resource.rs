// ============================================================================
// Resource Model
// ============================================================================
//
// The two resource collections the gateway exposes, the operations defined on
// them, and the mapping from (resource, operation, id) to an upstream URL.
//
// Resource-specific behavior (tenant-override eligibility, the DELETE
// trailing-slash quirk, localized acknowledgment text) lives here as a small
// policy table instead of duplicated per-resource control flow.
//
// ============================================================================

use reqwest::Method;

/// Resource collection exposed by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Employee,
    Seller,
}

impl Resource {
    /// Upstream path segment for this resource
    pub fn segment(&self) -> &'static str {
        match self {
            Resource::Employee => "Cliente",
            Resource::Seller => "Vendedor",
        }
    }

    /// Whether the caller may select the `BaseDeDatos` partition.
    ///
    /// Sellers may; employees always use the deployment default. This is an
    /// intentional privilege asymmetry between the two resource types.
    pub fn allows_tenant_override(&self) -> bool {
        matches!(self, Resource::Seller)
    }

    /// Body returned to the caller after a successful DELETE
    pub fn delete_ack(&self) -> &'static str {
        match self {
            Resource::Employee => "Empleado eliminado exitosamente",
            Resource::Seller => "Vendedor eliminado exitosamente",
        }
    }
}

/// Operation the caller requested on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    GetOne,
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Single-entity operations require an `id` query parameter
    pub fn requires_id(&self) -> bool {
        matches!(self, Operation::GetOne | Operation::Update | Operation::Delete)
    }

    pub fn http_method(&self) -> Method {
        match self {
            Operation::GetOne | Operation::List => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }
}

/// Build the upstream URL for an operation.
///
/// Collection operations target `{base}/{segment}/`; entity operations target
/// `{base}/{segment}/{id}`. DELETE appends a trailing slash: the upstream's
/// routing table only matches DELETE with it. Compatibility shim, not a
/// defect to fix here.
pub fn upstream_url(base: &str, resource: Resource, operation: Operation, id: Option<&str>) -> String {
    let segment = resource.segment();
    match (operation, id) {
        (Operation::Delete, Some(id)) => format!("{base}/{segment}/{id}/"),
        (_, Some(id)) => format!("{base}/{segment}/{id}"),
        (_, None) => format!("{base}/{segment}/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://erp.example.com/api";

    #[test]
    fn entity_urls_carry_the_identifier() {
        assert_eq!(
            upstream_url(BASE, Resource::Employee, Operation::GetOne, Some("42")),
            "https://erp.example.com/api/Cliente/42"
        );
        assert_eq!(
            upstream_url(BASE, Resource::Seller, Operation::Update, Some("7")),
            "https://erp.example.com/api/Vendedor/7"
        );
    }

    #[test]
    fn collection_urls_end_with_a_slash() {
        assert_eq!(
            upstream_url(BASE, Resource::Employee, Operation::Create, None),
            "https://erp.example.com/api/Cliente/"
        );
        assert_eq!(
            upstream_url(BASE, Resource::Seller, Operation::List, None),
            "https://erp.example.com/api/Vendedor/"
        );
    }

    #[test]
    fn delete_urls_keep_the_trailing_slash_quirk() {
        assert_eq!(
            upstream_url(BASE, Resource::Employee, Operation::Delete, Some("42")),
            "https://erp.example.com/api/Cliente/42/"
        );
        assert_eq!(
            upstream_url(BASE, Resource::Seller, Operation::Delete, Some("9")),
            "https://erp.example.com/api/Vendedor/9/"
        );
    }

    #[test]
    fn id_requirements_per_operation() {
        assert!(Operation::GetOne.requires_id());
        assert!(Operation::Update.requires_id());
        assert!(Operation::Delete.requires_id());
        assert!(!Operation::Create.requires_id());
        assert!(!Operation::List.requires_id());
    }

    #[test]
    fn only_sellers_allow_tenant_override() {
        assert!(Resource::Seller.allows_tenant_override());
        assert!(!Resource::Employee.allows_tenant_override());
    }
}
