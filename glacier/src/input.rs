/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{InventoryRetrievalJobInput, JobParameters, StatusCode};
use crate::{API_VERSION, SERVICE_NAME};
use http::Method;
use lazy_static::lazy_static;
use wire_http::descriptor::{FieldBinding, Protocol, RequestDescriptor};
use wire_http::operation::OperationInput;
use wire_types::Value;

const GLACIER_VERSION_HEADER: &str = "x-amz-glacier-version";

fn glacier_version() -> Value {
    Value::from(API_VERSION)
}

/// Downloads the output of a completed job
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetJobOutputInput {
    /// `-` addresses the account that signs the request
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_id: Option<String>,
    /// Byte range to download, eg. `bytes=0-1048575`
    pub range: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListJobsInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub limit: Option<i32>,
    pub marker: Option<String>,
    pub statuscode: Option<StatusCode>,
    pub completed: Option<bool>,
}

/// Starts an archive or inventory retrieval job. The body is the job parameters document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InitiateJobInput {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_parameters: Option<JobParameters>,
}

impl InitiateJobInput {
    fn job_parameter(&self, field: fn(&JobParameters) -> Option<&String>) -> Option<Value> {
        self.job_parameters
            .as_ref()
            .and_then(field)
            .map(Value::from)
    }
}

lazy_static! {
    static ref GET_JOB_OUTPUT: RequestDescriptor<GetJobOutputInput> = RequestDescriptor::new(
        SERVICE_NAME,
        "GetJobOutput",
        Method::GET,
        "/{accountId}/vaults/{vaultName}/jobs/{jobId}/output",
        Protocol::RestJson1,
        vec![
            FieldBinding::path("accountId", |i: &GetJobOutputInput| {
                i.account_id.as_ref().map(Value::from)
            }),
            FieldBinding::path("vaultName", |i: &GetJobOutputInput| {
                i.vault_name.as_ref().map(Value::from)
            }),
            FieldBinding::path("jobId", |i: &GetJobOutputInput| {
                i.job_id.as_ref().map(Value::from)
            }),
            FieldBinding::header("Range", |i: &GetJobOutputInput| {
                i.range.as_ref().map(Value::from)
            }),
            FieldBinding::header(GLACIER_VERSION_HEADER, |_: &GetJobOutputInput| None)
                .with_default(glacier_version),
        ],
    )
    .expect("GetJobOutput descriptor is valid");
    static ref LIST_JOBS: RequestDescriptor<ListJobsInput> = RequestDescriptor::new(
        SERVICE_NAME,
        "ListJobs",
        Method::GET,
        "/{accountId}/vaults/{vaultName}/jobs",
        Protocol::RestJson1,
        vec![
            FieldBinding::path("accountId", |i: &ListJobsInput| {
                i.account_id.as_ref().map(Value::from)
            }),
            FieldBinding::path("vaultName", |i: &ListJobsInput| {
                i.vault_name.as_ref().map(Value::from)
            }),
            FieldBinding::query("limit", |i: &ListJobsInput| i.limit.map(Value::from)),
            FieldBinding::query("marker", |i: &ListJobsInput| {
                i.marker.as_ref().map(Value::from)
            }),
            FieldBinding::query("statuscode", |i: &ListJobsInput| {
                i.statuscode.as_ref().map(|s| Value::from(s.as_str()))
            }),
            FieldBinding::query("completed", |i: &ListJobsInput| i.completed.map(Value::from)),
            FieldBinding::header(GLACIER_VERSION_HEADER, |_: &ListJobsInput| None)
                .with_default(glacier_version),
        ],
    )
    .expect("ListJobs descriptor is valid");
    static ref INITIATE_JOB: RequestDescriptor<InitiateJobInput> = RequestDescriptor::new(
        SERVICE_NAME,
        "InitiateJob",
        Method::POST,
        "/{accountId}/vaults/{vaultName}/jobs",
        Protocol::RestJson1,
        vec![
            FieldBinding::path("accountId", |i: &InitiateJobInput| {
                i.account_id.as_ref().map(Value::from)
            }),
            FieldBinding::path("vaultName", |i: &InitiateJobInput| {
                i.vault_name.as_ref().map(Value::from)
            }),
            FieldBinding::header(GLACIER_VERSION_HEADER, |_: &InitiateJobInput| None)
                .with_default(glacier_version),
            FieldBinding::body("Format", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.format.as_ref())
            }),
            FieldBinding::body("Type", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.r#type.as_ref())
            }),
            FieldBinding::body("ArchiveId", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.archive_id.as_ref())
            }),
            FieldBinding::body("Description", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.description.as_ref())
            }),
            FieldBinding::body("SNSTopic", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.sns_topic.as_ref())
            }),
            FieldBinding::body("RetrievalByteRange", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.retrieval_byte_range.as_ref())
            }),
            FieldBinding::body("Tier", |i: &InitiateJobInput| {
                i.job_parameter(|p| p.tier.as_ref())
            }),
            FieldBinding::body("InventoryRetrievalParameters", |i: &InitiateJobInput| {
                i.job_parameters
                    .as_ref()
                    .and_then(|p| p.inventory_retrieval_parameters.as_ref())
                    .map(InventoryRetrievalJobInput::to_value)
            }),
        ],
    )
    .expect("InitiateJob descriptor is valid");
}

impl OperationInput for GetJobOutputInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &GET_JOB_OUTPUT
    }
}

impl OperationInput for ListJobsInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &LIST_JOBS
    }
}

impl OperationInput for InitiateJobInput {
    fn descriptor() -> &'static RequestDescriptor<Self> {
        &INITIATE_JOB
    }
}
