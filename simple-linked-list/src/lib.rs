//! Singly linked LIFO list.
//!
//! `push` and `pop` work at the head, so iteration yields the most recently
//! pushed element first. Collecting from an iterator pushes in input order,
//! which leaves the list reversed relative to its input.

pub struct SimpleLinkedList<T> {
    length: usize,
    head: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

impl<T> SimpleLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, length: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn len(&self) -> usize {
        self.length
    }

    /// # Examples
    ///
    /// ```
    /// use simple_linked_list::SimpleLinkedList;
    /// let mut list = SimpleLinkedList::new();
    /// list.push(1).push(2).push(3);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.peek(), Some(&3));
    /// ```
    pub fn push(&mut self, elem: T) -> &mut Self {
        let node = Box::new(Node { elem, next: self.head.take() });
        self.head = Some(node);
        self.length += 1;
        self
    }

    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.length -= 1;
            node.elem
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    /// Reverse in place by relinking the existing nodes.
    ///
    /// ```
    /// use simple_linked_list::SimpleLinkedList;
    /// let mut list: SimpleLinkedList<_> = [1, 2, 3].into_iter().collect();
    /// let items: Vec<_> = list.reverse().iter().copied().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    pub fn reverse(&mut self) -> &mut Self {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        self
    }

    /// Head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }
}

impl<T> Default for SimpleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long lists.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SimpleLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ------------------------------ Iterators -------------------------------- //

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

pub struct IntoIter<T>(SimpleLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for SimpleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SimpleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for SimpleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for elem in iter {
            list.push(elem);
        }
        list
    }
}

/// Elements in push order, oldest first.
impl<T> From<SimpleLinkedList<T>> for Vec<T> {
    fn from(mut list: SimpleLinkedList<T>) -> Self {
        list.reverse();
        list.into_iter().collect()
    }
}
