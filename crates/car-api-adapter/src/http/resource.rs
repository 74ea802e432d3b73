/*
[INPUT]:  Resource name and CRUD operation with its argument
[OUTPUT]: The single ApiRequest that operation issues
[POS]:    HTTP layer - table-driven request factory for /car/<resource> routes
[UPDATE]: When the backend changes its CRUD route conventions
*/

use serde_json::Value;

use crate::http::{ApiRequest, QueryParams, ResourceId, Upload};
use crate::types::Resource;

/// Root segment of every CRUD resource
pub(crate) const CAR_PREFIX: &str = "car";

/// One CRUD operation together with its argument
#[derive(Debug, Clone, PartialEq)]
pub enum CrudOperation {
    List(QueryParams),
    Get(ResourceId),
    Add(Value),
    /// The payload carries the identifier; the path has none
    Update(Value),
    Delete(ResourceId),
    Export(QueryParams),
    /// Blank spreadsheet with the resource's import columns
    ImportTemplate,
    ImportData(Upload),
}

impl Resource {
    /// Map `(resource, operation)` onto method, path, query and body.
    ///
    /// | operation | request                                   |
    /// |-----------|-------------------------------------------|
    /// | List      | GET    /car/{r}/list?{query}              |
    /// | Get       | GET    /car/{r}/{id}                      |
    /// | Add       | POST   /car/{r}          (JSON body)      |
    /// | Update    | PUT    /car/{r}          (JSON body)      |
    /// | Delete    | DELETE /car/{r}/{id}                      |
    /// | Export    | POST   /car/{r}/export   (form body)      |
    /// | ImportTemplate | POST /car/{r}/importTemplate         |
    /// | ImportData     | POST /car/{r}/importData (multipart) |
    pub fn request(self, operation: CrudOperation) -> ApiRequest {
        let root = [CAR_PREFIX, self.segment()];
        match operation {
            CrudOperation::List(query) => ApiRequest::get(with_tail(root, "list")).with_query(query),
            CrudOperation::Get(id) => ApiRequest::get(with_tail(root, id.as_str())),
            CrudOperation::Add(data) => ApiRequest::post(root).with_json(data),
            CrudOperation::Update(data) => ApiRequest::put(root).with_json(data),
            CrudOperation::Delete(id) => ApiRequest::delete(with_tail(root, id.as_str())),
            CrudOperation::Export(query) => ApiRequest::post(with_tail(root, "export")).with_form(query),
            CrudOperation::ImportTemplate => ApiRequest::post(with_tail(root, "importTemplate")),
            CrudOperation::ImportData(upload) => {
                ApiRequest::post(with_tail(root, "importData")).with_upload(upload)
            }
        }
    }
}

fn with_tail<'a>(root: [&'a str; 2], tail: &'a str) -> [&'a str; 3] {
    [root[0], root[1], tail]
}
