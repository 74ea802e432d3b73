/*
[INPUT]:  Resource selector plus query, identifier or payload
[OUTPUT]: Raw backend responses for list/get/add/update/delete, export and import
[POS]:    HTTP layer - CRUD endpoints shared by every /car/<resource> route
[UPDATE]: When adding CRUD operations or resource accessors
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{CarApiClient, CrudOperation, QueryParams, ResourceId, Result, Upload};
use crate::types::Resource;

/// CRUD handle for one resource, borrowed from a [`CarApiClient`]
#[derive(Debug, Clone, Copy)]
pub struct ResourceApi<'a> {
    client: &'a CarApiClient,
    resource: Resource,
}

impl ResourceApi<'_> {
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// GET /car/{resource}/list?{query}
    pub async fn list(&self, query: &QueryParams) -> Result<Value> {
        self.call(CrudOperation::List(query.clone())).await
    }

    /// GET /car/{resource}/{id}
    pub async fn get(&self, id: impl Into<ResourceId>) -> Result<Value> {
        self.call(CrudOperation::Get(id.into())).await
    }

    /// POST /car/{resource}
    pub async fn add<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let body = serde_json::to_value(data)?;
        self.call(CrudOperation::Add(body)).await
    }

    /// PUT /car/{resource}
    ///
    /// The payload must carry the identifier field itself.
    pub async fn update<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let body = serde_json::to_value(data)?;
        self.call(CrudOperation::Update(body)).await
    }

    /// DELETE /car/{resource}/{id}
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Result<Value> {
        self.call(CrudOperation::Delete(id.into())).await
    }

    /// DELETE /car/{resource}/{id1,id2,...}
    pub async fn delete_many<I>(&self, ids: I) -> Result<Value>
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        self.call(CrudOperation::Delete(ResourceId::join(ids))).await
    }

    /// POST /car/{resource}/export, returns the spreadsheet bytes
    pub async fn export(&self, query: &QueryParams) -> Result<Vec<u8>> {
        let request = self.resource.request(CrudOperation::Export(query.clone()));
        self.client.send_bytes(request).await
    }

    /// POST /car/{resource}/importTemplate, returns the blank spreadsheet
    pub async fn import_template(&self) -> Result<Vec<u8>> {
        let request = self.resource.request(CrudOperation::ImportTemplate);
        self.client.send_bytes(request).await
    }

    /// POST /car/{resource}/importData with the spreadsheet as field `file`
    pub async fn import_data(
        &self,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<Value> {
        self.call(CrudOperation::ImportData(Upload::file(file_name, bytes)))
            .await
    }

    async fn call(&self, operation: CrudOperation) -> Result<Value> {
        self.client.send(self.resource.request(operation)).await
    }
}

impl CarApiClient {
    /// CRUD handle for any resource
    pub fn resource(&self, resource: Resource) -> ResourceApi<'_> {
        ResourceApi {
            client: self,
            resource,
        }
    }

    pub fn like(&self) -> ResourceApi<'_> {
        self.resource(Resource::Like)
    }

    pub fn model(&self) -> ResourceApi<'_> {
        self.resource(Resource::Model)
    }

    pub fn recommend(&self) -> ResourceApi<'_> {
        self.resource(Resource::Recommend)
    }

    pub fn sales(&self) -> ResourceApi<'_> {
        self.resource(Resource::Sales)
    }

    pub fn series(&self) -> ResourceApi<'_> {
        self.resource(Resource::Series)
    }

    pub fn statistics_info(&self) -> ResourceApi<'_> {
        self.resource(Resource::StatisticsInfo)
    }

    pub fn view(&self) -> ResourceApi<'_> {
        self.resource(Resource::View)
    }
}
