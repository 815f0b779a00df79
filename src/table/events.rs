//! Table Events and Handlers
//!
//! Row clicks and action buttons produce a [`TableEvent`]; the optional
//! handlers in [`TableHandlers`] receive it. A missing handler is a no-op.
//!
//! Handlers are generic over the context they run in so the dispatch logic
//! can be exercised without a running application.

use std::rc::Rc;

use super::cell::ActionKind;
use super::record::{Record, Value};

/// Something the user did to a row
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    RowClicked(Record),
    Edit(Record),
    Delete(Value),
    Publish(Value),
    Archive(Value),
    Restore(Value),
}

impl TableEvent {
    /// Event for an action button on `record`.
    ///
    /// Edit carries the whole record, every other action carries its `id`.
    pub fn for_action(action: ActionKind, record: &Record) -> Self {
        match action {
            ActionKind::Edit => TableEvent::Edit(record.clone()),
            ActionKind::Publish => TableEvent::Publish(record.id()),
            ActionKind::Archive => TableEvent::Archive(record.id()),
            ActionKind::Restore => TableEvent::Restore(record.id()),
            ActionKind::Delete => TableEvent::Delete(record.id()),
        }
    }
}

type RecordHandler<C> = Rc<dyn Fn(&Record, &mut C)>;
type IdHandler<C> = Rc<dyn Fn(&Value, &mut C)>;

/// Optional callbacks for table events
pub struct TableHandlers<C> {
    on_row_click: Option<RecordHandler<C>>,
    on_edit: Option<RecordHandler<C>>,
    on_delete: Option<IdHandler<C>>,
    on_publish: Option<IdHandler<C>>,
    on_archive: Option<IdHandler<C>>,
    on_restore: Option<IdHandler<C>>,
}

impl<C> Default for TableHandlers<C> {
    fn default() -> Self {
        Self {
            on_row_click: None,
            on_edit: None,
            on_delete: None,
            on_publish: None,
            on_archive: None,
            on_restore: None,
        }
    }
}

impl<C> Clone for TableHandlers<C> {
    fn clone(&self) -> Self {
        Self {
            on_row_click: self.on_row_click.clone(),
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
            on_publish: self.on_publish.clone(),
            on_archive: self.on_archive.clone(),
            on_restore: self.on_restore.clone(),
        }
    }
}

impl<C> TableHandlers<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_row_click(mut self, handler: impl Fn(&Record, &mut C) + 'static) -> Self {
        self.on_row_click = Some(Rc::new(handler));
        self
    }

    pub fn on_edit(mut self, handler: impl Fn(&Record, &mut C) + 'static) -> Self {
        self.on_edit = Some(Rc::new(handler));
        self
    }

    pub fn on_delete(mut self, handler: impl Fn(&Value, &mut C) + 'static) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn on_publish(mut self, handler: impl Fn(&Value, &mut C) + 'static) -> Self {
        self.on_publish = Some(Rc::new(handler));
        self
    }

    pub fn on_archive(mut self, handler: impl Fn(&Value, &mut C) + 'static) -> Self {
        self.on_archive = Some(Rc::new(handler));
        self
    }

    pub fn on_restore(mut self, handler: impl Fn(&Value, &mut C) + 'static) -> Self {
        self.on_restore = Some(Rc::new(handler));
        self
    }

    /// Whether rows should look clickable
    pub fn has_row_click(&self) -> bool {
        self.on_row_click.is_some()
    }

    /// Invoke the handler for `event`; returns whether one was registered
    pub fn dispatch(&self, event: &TableEvent, cx: &mut C) -> bool {
        match event {
            TableEvent::RowClicked(record) => call(self.on_row_click.as_ref(), record, cx),
            TableEvent::Edit(record) => call(self.on_edit.as_ref(), record, cx),
            TableEvent::Delete(id) => call(self.on_delete.as_ref(), id, cx),
            TableEvent::Publish(id) => call(self.on_publish.as_ref(), id, cx),
            TableEvent::Archive(id) => call(self.on_archive.as_ref(), id, cx),
            TableEvent::Restore(id) => call(self.on_restore.as_ref(), id, cx),
        }
    }
}

fn call<T: ?Sized, C>(handler: Option<&Rc<dyn Fn(&T, &mut C)>>, arg: &T, cx: &mut C) -> bool {
    match handler {
        Some(handler) => {
            handler(arg, cx);
            true
        }
        None => false,
    }
}
