use crate::models::{CreateDeckRequest, DeckResponse};
use remote::{Remote, RemoteError};

pub(crate) struct DeckRepository<'a> {
    remote: &'a Remote,
}

impl<'a> DeckRepository<'a> {
    pub fn new(remote: &'a Remote) -> Self {
        Self { remote }
    }

    pub async fn create(&self, req: &CreateDeckRequest) -> Result<DeckResponse, RemoteError> {
        let mut url = self.remote.endpoint(req.path())?;
        url.query_pairs_mut()
            .append_pair("deck_count", &req.deck_count().to_string());

        self.remote.get_json(url).await
    }

    pub async fn draw(&self, deck_id: &str, count: u32) -> Result<DeckResponse, RemoteError> {
        let mut url = self.remote.endpoint(&[deck_id, "draw"])?;
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());

        self.remote.get_json(url).await
    }

    pub async fn shuffle(&self, deck_id: &str) -> Result<DeckResponse, RemoteError> {
        let url = self.remote.endpoint(&[deck_id, "shuffle"])?;

        self.remote.get_json(url).await
    }
}
