//! Endpoint paths for every resource the admin panel touches

use crate::state::RequirementKey;

pub const DOCUMENTS: &str = "/Documento";
pub const DOCUMENT_TYPES: &str = "/tipodocumento";
pub const INTERNSHIP_TYPES: &str = "/tipoestagio";
pub const REQUIREMENTS: &str = "/documentonecessario";

/// `/Documento/{id}`
pub fn document(id: i64) -> String {
    format!("{DOCUMENTS}/{id}")
}

/// `/documentonecessario/{idTipoDocumento}/{idTipoEstagio}`
///
/// Each half of the composite key is its own path segment.
pub fn requirement(key: RequirementKey) -> String {
    format!(
        "{REQUIREMENTS}/{}/{}",
        key.document_type_id, key.internship_type_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path() {
        assert_eq!(document(5), "/Documento/5");
    }

    #[test]
    fn test_requirement_path_keeps_both_keys() {
        let key = RequirementKey {
            document_type_id: 3,
            internship_type_id: 7,
        };
        assert_eq!(requirement(key), "/documentonecessario/3/7");
    }

    #[test]
    fn test_requirement_path_distinguishes_swapped_keys() {
        let a = RequirementKey {
            document_type_id: 1,
            internship_type_id: 2,
        };
        let b = RequirementKey {
            document_type_id: 2,
            internship_type_id: 1,
        };
        assert_ne!(requirement(a), requirement(b));
    }
}
