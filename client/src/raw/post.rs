use reqwest::{Method, RequestBuilder, Response};
use viaggio_shared::post::{
    handle::{EditPostDescriptor, PostDescriptor},
    Post,
};

/// Fetches the whole post collection.
pub struct ListPosts;

#[async_trait::async_trait]
impl super::Request for ListPosts {
    type Output = Vec<Post>;

    fn url_suffix(&self) -> String {
        "/posts".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Fetches a single post for detail display.
pub struct GetPost {
    pub id: u64,
}

#[async_trait::async_trait]
impl super::Request for GetPost {
    type Output = Post;

    fn url_suffix(&self) -> String {
        format!("/posts/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct CreatePost {
    pub descriptor: PostDescriptor,
}

#[async_trait::async_trait]
impl super::Request for CreatePost {
    /// The created post, with its server-assigned id.
    type Output = Post;

    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/posts".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct EditPost {
    pub id: u64,
    pub descriptor: EditPostDescriptor,
}

#[async_trait::async_trait]
impl super::Request for EditPost {
    /// The updated post as stored by the server.
    type Output = Post;

    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/posts/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> anyhow::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct DeletePost {
    pub id: u64,
}

#[async_trait::async_trait]
impl super::Request for DeletePost {
    type Output = ();

    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/posts/{}", self.id)
    }

    fn make_req(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, _response: Response) -> anyhow::Result<Self::Output> {
        Ok(())
    }
}
