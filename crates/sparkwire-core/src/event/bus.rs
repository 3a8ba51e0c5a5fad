// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A generic notification channel between the core and its presentation layer.
///
/// The bus is generic over the notification type `T`, so `sparkwire-core`
/// stays decoupled from the concrete notifications defined by the session.
/// Publishing never blocks: the channel is unbounded and the consumer drains
/// it at its own pace.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Notification bus initialized.");
        Self { sender, receiver }
    }

    /// Publishes a notification, logging an error if every receiver is gone.
    ///
    /// ## Arguments
    /// * `event` - The notification to push onto the channel.
    pub fn publish(&self, event: T) {
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to publish notification: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a reference to the receiver end of the channel.
    ///
    /// Intended for the presentation layer, which consumes notifications.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Returns the number of notifications waiting to be consumed.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
